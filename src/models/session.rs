use super::file::CandidateFile;

/// Phase of the single upload session.
///
/// `Succeeded` and `Failed` are transient: both are observable through
/// [`SessionChange`](crate::state::SessionChange) events, but the session is
/// reset to `Idle` right after the terminal notification so the user can
/// immediately retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Selected,
    Uploading,
    Succeeded,
    Failed,
}

impl SessionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Succeeded | SessionPhase::Failed)
    }
}

/// The one upload session a widget instance owns.
///
/// Invariants:
/// - `file` is present iff `phase != Idle`
/// - `last_error` is present iff `phase == Failed`
///
/// Only the [`SessionController`](crate::ui::SessionController) mutates a
/// session, and it does so through
/// [`SessionManager`](crate::state::SessionManager) so every mutation emits
/// change events.
#[derive(Debug, Clone)]
pub struct UploadSession {
    pub phase: SessionPhase,
    pub file: Option<CandidateFile>,
    pub last_error: Option<String>,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            file: None,
            last_error: None,
        }
    }
}

impl UploadSession {
    /// True while the network exchange is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == SessionPhase::Uploading
    }

    pub fn has_selection(&self) -> bool {
        self.file.is_some()
    }

    /// Return the session to its initial `Idle` shape.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check the structural invariants. Used by tests; transition helpers in
    /// [`SessionManager`](crate::state::SessionManager) are written so this
    /// always holds.
    pub fn invariants_hold(&self) -> bool {
        let file_ok = (self.phase == SessionPhase::Idle) == self.file.is_none();
        let error_ok = (self.phase == SessionPhase::Failed) == self.last_error.is_some();
        file_ok && error_ok
    }
}
