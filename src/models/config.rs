use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Default upload size ceiling: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Widget configuration loaded from `updrop.yaml`.
///
/// Immutable after initialization; shared across the widget via `Arc`.
/// The allowed-extension set keeps its declaration order so rejection
/// messages list extensions the way the operator wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(rename = "Max File Size", default = "default_max_file_size")]
    pub max_file_size: u64,

    #[serde(rename = "Allowed Extensions", default = "default_allowed_extensions")]
    pub allowed_extensions: IndexSet<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

fn default_allowed_extensions() -> IndexSet<String> {
    IndexSet::from([".md".to_string()])
}

impl UploadConfig {
    /// Normalize the allowed-extension set: lowercase, dot-prefixed.
    ///
    /// Operators write entries like `MD` or `.Md` in the YAML; the validator
    /// compares against the canonical form only.
    pub fn normalize(&mut self) {
        self.allowed_extensions = self
            .allowed_extensions
            .iter()
            .map(|ext| {
                let lowered = ext.to_lowercase();
                if lowered.starts_with('.') {
                    lowered
                } else {
                    format!(".{lowered}")
                }
            })
            .collect();
    }

    /// Check whether a canonical (lowercase, dot-prefixed) extension is allowed.
    pub fn is_extension_allowed(&self, extension: &str) -> bool {
        self.allowed_extensions.contains(extension)
    }

    /// Render the allowed set for user-facing rejection messages, e.g. `.md, .txt`.
    pub fn allowed_extensions_display(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
