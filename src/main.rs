//! updrop - console front end for the upload widget core.
//!
//! # Overview
//!
//! This binary drives one complete upload session against a processing
//! endpoint, the same flow a browser host would wire to DOM events:
//!
//! 1. Initialize logging → logs/updrop.<date>
//! 2. Create the tokio runtime
//! 3. Load the widget configuration from `updrop-data/updrop.yaml`
//!    (defaults: 10 MiB ceiling, `.md` only)
//! 4. Build the controller with a [`ConsoleSurface`] and the `reqwest`
//!    transport
//! 5. Offer the file named on the command line; if it validates, submit
//! 6. On success the returned payload lands in `downloads/processed_<name>`
//!
//! # Usage
//!
//! ```text
//! updrop <file> [endpoint]
//! ```
//!
//! The endpoint defaults to `http://127.0.0.1:8000/upload`.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::sync::Arc;
use updrop::metrics::METRICS;
use updrop::ui::ConsoleSurface;
use updrop::{
    APP_NAME, CandidateFile, ConfigManager, HttpUploadClient, SessionController, SessionManager,
    VERSION,
};

fn main() -> Result<()> {
    let _guard = updrop::logging::setup_logging("logs", "updrop", false, false)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let mut args = std::env::args().skip(1);
    let file_path = Utf8PathBuf::from(args.next().context("usage: updrop <file> [endpoint]")?);
    let endpoint = args
        .next()
        .unwrap_or_else(|| "http://127.0.0.1:8000/upload".to_string());

    // Runtime for the network exchange and notification dismiss timers
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("updrop-worker")
        .build()?;

    let config_manager = ConfigManager::new("updrop-data")?;
    let config = Arc::new(config_manager.load_upload_config()?);

    let session = Arc::new(SessionManager::new());
    let surface = Arc::new(ConsoleSurface::new("downloads")?);
    let endpoint_url = endpoint
        .parse()
        .with_context(|| format!("Invalid endpoint URL: {endpoint}"))?;
    let transport = Arc::new(HttpUploadClient::new(endpoint_url));

    let controller = SessionController::new(
        Arc::clone(&session),
        config,
        transport,
        surface,
        runtime.handle().clone(),
    );

    let content = std::fs::read(&file_path)
        .with_context(|| format!("Failed to read file: {file_path}"))?;
    let name = file_path
        .file_name()
        .context("File path has no file name")?
        .to_string();
    let file = CandidateFile::new(name, content.into());

    controller.offer_file(file);
    if session.read(|s| s.has_selection()) {
        runtime.block_on(controller.submit());
    }

    METRICS.log_summary();

    // Pending notification timers are cancelled with the runtime.
    runtime.shutdown_timeout(std::time::Duration::from_secs(5));

    tracing::info!("Shutdown complete");
    Ok(())
}
