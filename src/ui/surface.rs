use bytes::Bytes;
use std::fmt;

/// Severity class of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS-class-style name, as hosts typically tag the notification element.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability interface of the rendering collaborator.
///
/// The controller depends on this single injected trait instead of concrete
/// UI handles, which is what makes the widget core headless-testable. A host
/// (DOM bridge, GUI toolkit, console) implements it; the core never learns
/// what the surface is made of.
///
/// All methods are fire-and-forget: a surface that cannot honor a call (e.g.
/// a disk write fails while delivering a download) logs and carries on - the
/// session state machine does not depend on surface outcomes.
pub trait RenderSurface: Send + Sync {
    /// Display the selected file's metadata (name plus formatted size).
    fn show_file_info(&self, name: &str, size_display: &str);

    /// Hide the file metadata panel.
    fn clear_file_info(&self);

    /// Show or hide the progress indicator.
    fn set_progress_visible(&self, visible: bool);

    /// Enable or disable the submit affordance.
    fn set_submit_enabled(&self, enabled: bool);

    /// Toggle the drop-target highlight. Purely visual; carries no
    /// state-machine semantics.
    fn set_drop_highlight(&self, active: bool);

    /// Show a severity-tagged notification. Dismissal is scheduled by the
    /// [`Notifier`](crate::ui::notify::Notifier), not the surface.
    fn show_notification(&self, message: &str, severity: Severity);

    /// Hide the notification, if visible.
    fn hide_notification(&self);

    /// Expose a successful response payload to the user as a downloadable
    /// artifact. Ownership of the payload transfers to the surface; the core
    /// keeps no reference after this call.
    fn trigger_download(&self, file_name: &str, payload: Bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_class_names() {
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
