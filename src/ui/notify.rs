use crate::metrics::METRICS;
use crate::ui::surface::{RenderSurface, Severity};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a notification stays visible, measured from each `post` call.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Transient notification emitter.
///
/// Shows a severity-tagged message on the surface and schedules it to hide
/// after a fixed delay. The pending hide is a cancellable task: a later post
/// aborts the earlier timer and starts its own, so a new notification
/// deterministically supersedes a pending dismissal instead of racing it.
pub struct Notifier {
    surface: Arc<dyn RenderSurface>,

    /// Handle to the tokio runtime the dismiss timers run on.
    runtime: tokio::runtime::Handle,

    dismiss_after: Duration,

    /// The currently scheduled hide, if any.
    pending_hide: Mutex<Option<JoinHandle<()>>>,
}

impl Notifier {
    pub fn new(surface: Arc<dyn RenderSurface>, runtime: tokio::runtime::Handle) -> Self {
        Self {
            surface,
            runtime,
            dismiss_after: DISMISS_AFTER,
            pending_hide: Mutex::new(None),
        }
    }

    /// Override the dismissal delay. Tests shorten it; hosts normally keep
    /// the default.
    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    /// Show `message` and (re)schedule the auto-dismiss.
    pub fn post(&self, message: &str, severity: Severity) {
        tracing::debug!(%severity, "Notification: {message}");
        self.surface.show_notification(message, severity);
        METRICS.record_notification();

        let surface = Arc::clone(&self.surface);
        let delay = self.dismiss_after;
        let hide = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            surface.hide_notification();
        });

        let mut pending = self.pending_hide.lock().unwrap();
        if let Some(previous) = pending.replace(hide) {
            // Supersede: the earlier notification's dismissal must not clip
            // the one we just showed.
            previous.abort();
        }
    }
}
