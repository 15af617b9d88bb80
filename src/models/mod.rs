//! Data models for the upload widget core.
//!
//! This module contains the core data structures used throughout the widget:
//! - [`UploadSession`] / [`SessionPhase`]: the single session's state record
//! - [`CandidateFile`]: the file currently offered by the user
//! - [`UploadConfig`]: accepted extensions and the size ceiling, loaded from YAML
//! - [`format_size`]: the human-readable size formatter used for metadata and
//!   rejection messages
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: config structs derive `Serialize`/`Deserialize` for YAML persistence
//! - **Cloneable**: `UploadSession` is wrapped in `Arc<RwLock<>>` by
//!   [`SessionManager`](crate::state::SessionManager) for thread-safe access
//! - **Passive**: state transitions go through the controller and manager so
//!   every observable mutation emits a change event

pub mod config;
pub mod file;
pub mod session;

pub use config::{DEFAULT_MAX_FILE_SIZE, UploadConfig};
pub use file::{CandidateFile, format_size};
pub use session::{SessionPhase, UploadSession};
