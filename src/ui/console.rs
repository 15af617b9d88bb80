use crate::ui::surface::{RenderSurface, Severity};
use anyhow::{Context, Result};
use bytes::Bytes;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Minimal stdout rendering surface used by the `updrop` binary.
///
/// Prints metadata and notifications, and materializes delivered downloads
/// as files under a directory. Real hosts (a DOM bridge, a GUI toolkit)
/// implement [`RenderSurface`] against their own widgets instead.
pub struct ConsoleSurface {
    download_dir: Utf8PathBuf,
}

impl ConsoleSurface {
    /// Create the surface, making sure the download directory exists.
    pub fn new<P: AsRef<Utf8Path>>(download_dir: P) -> Result<Self> {
        let download_dir = download_dir.as_ref().to_path_buf();
        if !download_dir.exists() {
            fs::create_dir_all(&download_dir)
                .with_context(|| format!("Failed to create download directory: {download_dir}"))?;
        }
        Ok(Self { download_dir })
    }

    pub fn download_dir(&self) -> &Utf8Path {
        &self.download_dir
    }
}

impl RenderSurface for ConsoleSurface {
    fn show_file_info(&self, name: &str, size_display: &str) {
        println!("Selected: {name} ({size_display})");
    }

    fn clear_file_info(&self) {
        println!("Selection cleared");
    }

    fn set_progress_visible(&self, visible: bool) {
        if visible {
            println!("Uploading...");
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "Submit affordance toggled");
    }

    fn set_drop_highlight(&self, active: bool) {
        tracing::trace!(active, "Drop highlight toggled");
    }

    fn show_notification(&self, message: &str, severity: Severity) {
        println!("[{severity}] {message}");
    }

    fn hide_notification(&self) {
        // A terminal has nothing to dismiss.
    }

    fn trigger_download(&self, file_name: &str, payload: Bytes) {
        let target = self.download_dir.join(file_name);
        match fs::write(&target, &payload) {
            Ok(()) => println!("Saved: {target}"),
            Err(e) => {
                // Surface failures must not disturb the session machine.
                tracing::error!("Failed to write download {target}: {e}");
                eprintln!("Could not save {target}: {e}");
            }
        }
    }
}
