use bytes::Bytes;

/// Units used by [`format_size`]. The index is the power of 1024.
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// The file currently chosen by the user, prior to or during submission.
///
/// Ephemeral: a candidate exists only within one upload session and is never
/// persisted. `content` is an opaque payload handle; the core never inspects
/// it. `size_bytes` is carried separately from `content` because the host
/// surface reports the size it knows (a browser `File`, a picker entry)
/// before the bytes are necessarily materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub size_bytes: u64,
    pub content: Bytes,
}

impl CandidateFile {
    /// Build a candidate whose declared size is the payload length.
    pub fn new(name: impl Into<String>, content: Bytes) -> Self {
        Self {
            name: name.into(),
            size_bytes: content.len() as u64,
            content,
        }
    }

    /// Canonical extension: the substring after the last `.`, lowercased and
    /// dot-prefixed. `None` when the name has no dot at all.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{}", ext.to_lowercase()))
    }

    /// The name with any path components stripped.
    ///
    /// Offered names normally carry no separators, but a hostile or sloppy
    /// host must not be able to smuggle directories into the artifact name.
    pub fn base_name(&self) -> &str {
        self.name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.name.as_str())
    }

    /// Name of the downloadable artifact produced from this candidate:
    /// `processed_<original name>`, original extension kept, never the
    /// server-reported name.
    pub fn download_name(&self) -> String {
        format!("processed_{}", self.base_name())
    }
}

/// Render a byte count the way the widget displays it: largest unit among
/// Bytes/KB/MB/GB with the quotient rounded to two decimals and trailing
/// zeros trimmed. Zero is the literal `0 Bytes`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);

    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, SIZE_UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_uses_last_dot() {
        let file = CandidateFile::new("notes.backup.MD", Bytes::from_static(b"x"));
        assert_eq!(file.extension(), Some(".md".to_string()));
    }

    #[test]
    fn test_extension_missing_when_no_dot() {
        let file = CandidateFile::new("README", Bytes::from_static(b"x"));
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn test_base_name_strips_path_components() {
        let file = CandidateFile::new("dir/sub\\notes.md", Bytes::from_static(b"x"));
        assert_eq!(file.base_name(), "notes.md");
    }

    #[test]
    fn test_download_name() {
        let file = CandidateFile::new("notes.md", Bytes::from_static(b"x"));
        assert_eq!(file.download_name(), "processed_notes.md");

        let sneaky = CandidateFile::new("../secret/notes.md", Bytes::from_static(b"x"));
        assert_eq!(sneaky.download_name(), "processed_notes.md");
    }

    #[test]
    fn test_new_takes_size_from_content() {
        let file = CandidateFile::new("a.md", Bytes::from_static(b"hello"));
        assert_eq!(file.size_bytes, 5);
    }

    #[test]
    fn test_format_size_fixed_points() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(10 * 1024 * 1024), "10 MB");
    }

    #[test]
    fn test_format_size_sub_kilobyte() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_format_size_rounds_to_two_decimals() {
        // 1234567 / 1024^2 = 1.1773...
        assert_eq!(format_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_format_size_clamps_to_largest_unit() {
        // 1 TiB has no unit of its own; it renders as 1024 GB.
        assert_eq!(format_size(1024 * 1024 * 1024 * 1024), "1024 GB");
    }
}
