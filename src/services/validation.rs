use crate::models::{CandidateFile, UploadConfig, format_size};
use thiserror::Error;

/// Reasons a candidate file is rejected before any network activity.
///
/// The original widget signalled these by throwing; here they are an explicit
/// discriminated result so callers cannot forget the rejection path. Each
/// variant's `Display` text is the user-facing notification message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Unsupported file type (allowed: {allowed})")]
    UnsupportedType { allowed: String },

    #[error("File is too large (limit: {limit})")]
    TooLarge { limit: String },
}

/// Decide whether a candidate may be submitted.
///
/// Rules are applied in precedence order and short-circuit on the first
/// failure; no reasons are accumulated:
/// 1. a file must be present at all,
/// 2. its extension (after the last `.`, lowercased) must be in the allowed
///    set — a name without a dot has no extension and fails,
/// 3. its size must not exceed the configured ceiling.
///
/// Pure function of its inputs; no side effects.
pub fn validate(file: Option<&CandidateFile>, config: &UploadConfig) -> Result<(), ValidationError> {
    let Some(file) = file else {
        return Err(ValidationError::NoFileSelected);
    };

    let extension = file.extension().unwrap_or_default();
    if !config.is_extension_allowed(&extension) {
        return Err(ValidationError::UnsupportedType {
            allowed: config.allowed_extensions_display(),
        });
    }

    if file.size_bytes > config.max_file_size {
        return Err(ValidationError::TooLarge {
            limit: format_size(config.max_file_size),
        });
    }

    Ok(())
}
