// updrop - headless single-file upload widget core
//
// This is the library crate containing the session state machine, validation,
// and the processing-endpoint exchange. The binary crate (main.rs) provides a
// console front end that drives one upload end-to-end.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{CandidateFile, SessionPhase, UploadConfig, UploadSession, format_size};
pub use services::upload::{HttpUploadClient, UploadError, UploadTransport};
pub use services::validation::{ValidationError, validate};
pub use state::{SessionChange, SessionManager};
pub use ui::{RenderSurface, SessionController, Severity};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
