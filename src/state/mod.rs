// State management module
//
// Provides the SessionManager which wraps UploadSession with thread-safe
// access using Arc<RwLock<T>> and emits change events for surface updates.

use crate::metrics::METRICS;
use crate::models::{CandidateFile, SessionPhase, UploadSession};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when the session is modified.
///
/// These notify interested parties (primarily the host surface) about state
/// changes without requiring them to poll the session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionChange {
    /// A candidate passed validation and is now the selection. Re-emitted when
    /// a later offer replaces an earlier one (last offer wins).
    FileSelected { name: String, size_bytes: u64 },

    /// The selection was removed and the session is idle again.
    SelectionCleared,

    /// The network exchange for the named candidate has started.
    UploadStarted { name: String },

    /// The endpoint returned a payload; `download_name` is the artifact name
    /// derived from the original candidate.
    UploadSucceeded { download_name: String },

    /// The exchange failed; `message` is the user-visible reason.
    UploadFailed { message: String },

    /// A terminal phase was folded back into `Idle`.
    SessionReset,
}

/// Thread-safe session manager with event emission.
///
/// This is the central state component:
/// - provides thread-safe access to [`UploadSession`] via `Arc<RwLock<T>>`
/// - detects mutations and emits [`SessionChange`] events
/// - supports subscribing to changes via tokio broadcast channels
///
/// Only the [`SessionController`](crate::ui::SessionController) drives
/// transitions; hosts subscribe and read.
pub struct SessionManager {
    /// The session record protected by RwLock for thread-safe access
    session: Arc<RwLock<UploadSession>>,

    /// Broadcast channel for emitting change events.
    /// Multiple subscribers can listen simultaneously.
    change_tx: broadcast::Sender<SessionChange>,
}

impl SessionManager {
    /// Create a new manager holding an idle session.
    pub fn new() -> Self {
        let (change_tx, _) = broadcast::channel(64);
        Self {
            session: Arc::new(RwLock::new(UploadSession::default())),
            change_tx,
        }
    }

    /// Get a clone of the current session record.
    pub fn snapshot(&self) -> UploadSession {
        self.session.read().unwrap().clone()
    }

    /// Execute a function with read access to the session.
    ///
    /// # Example
    /// ```ignore
    /// let busy = manager.read(|s| s.is_busy());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&UploadSession) -> R,
    {
        let session = self.session.read().unwrap();
        f(&session)
    }

    /// Apply a mutation and emit the change events it produced.
    ///
    /// 1. Captures the old session
    /// 2. Applies the update function
    /// 3. Diffs old vs new
    /// 4. Broadcasts the resulting events
    ///
    /// Returns the events that were emitted.
    pub fn update<F>(&self, update_fn: F) -> Vec<SessionChange>
    where
        F: FnOnce(&mut UploadSession),
    {
        let mut session = self.session.write().unwrap();
        let old = session.clone();

        update_fn(&mut session);
        METRICS.record_state_update();

        let changes = Self::detect_changes(&old, &session);
        for change in &changes {
            // Ignore send errors - it's OK if no one is listening
            if self.change_tx.send(change.clone()).is_ok() {
                METRICS.record_state_broadcast();
            }
        }

        changes
    }

    /// Subscribe to change events. Multiple subscribers are supported.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionChange> {
        self.change_tx.subscribe()
    }

    /// Diff two session records into change events.
    fn detect_changes(old: &UploadSession, new: &UploadSession) -> Vec<SessionChange> {
        let mut changes = Vec::new();

        let file_replaced = match (&old.file, &new.file) {
            (Some(a), Some(b)) => a.name != b.name || a.size_bytes != b.size_bytes,
            (None, None) => false,
            _ => true,
        };

        match (old.phase, new.phase) {
            (a, b) if a == b => {
                // Same phase: the only observable in-place change is a
                // replaced selection (last offer wins).
                if new.phase == SessionPhase::Selected && file_replaced {
                    if let Some(file) = &new.file {
                        changes.push(SessionChange::FileSelected {
                            name: file.name.clone(),
                            size_bytes: file.size_bytes,
                        });
                    }
                }
            }
            (_, SessionPhase::Selected) => {
                if let Some(file) = &new.file {
                    changes.push(SessionChange::FileSelected {
                        name: file.name.clone(),
                        size_bytes: file.size_bytes,
                    });
                }
            }
            (_, SessionPhase::Uploading) => {
                if let Some(file) = &new.file {
                    changes.push(SessionChange::UploadStarted {
                        name: file.name.clone(),
                    });
                }
            }
            (_, SessionPhase::Succeeded) => {
                if let Some(file) = &new.file {
                    changes.push(SessionChange::UploadSucceeded {
                        download_name: file.download_name(),
                    });
                }
            }
            (_, SessionPhase::Failed) => {
                changes.push(SessionChange::UploadFailed {
                    message: new.last_error.clone().unwrap_or_default(),
                });
            }
            (SessionPhase::Selected, SessionPhase::Idle) => {
                changes.push(SessionChange::SelectionCleared);
            }
            (old_phase, SessionPhase::Idle) if old_phase.is_terminal() => {
                changes.push(SessionChange::SessionReset);
            }
            _ => {}
        }

        changes
    }

    // Intent-shaped transition helpers. These keep the UploadSession
    // invariants (file iff not idle, last_error iff failed).

    /// Install a validated candidate as the selection.
    pub fn select_file(&self, file: CandidateFile) -> Vec<SessionChange> {
        self.update(|s| {
            s.phase = SessionPhase::Selected;
            s.file = Some(file);
            s.last_error = None;
        })
    }

    /// Drop the selection and return to idle.
    pub fn clear_selection(&self) -> Vec<SessionChange> {
        self.update(|s| s.reset())
    }

    /// Mark the network exchange as in flight. The selection must be present.
    pub fn begin_upload(&self) -> Vec<SessionChange> {
        self.update(|s| {
            if s.file.is_some() {
                s.phase = SessionPhase::Uploading;
            } else {
                tracing::warn!("begin_upload called with no selection - ignored");
            }
        })
    }

    /// Record a successful exchange, then fold the session back to idle.
    pub fn finish_success(&self) -> Vec<SessionChange> {
        let mut changes = self.update(|s| s.phase = SessionPhase::Succeeded);
        changes.extend(self.update(|s| s.reset()));
        changes
    }

    /// Record a failed exchange, then fold the session back to idle so the
    /// user can immediately retry. The failure is not retained.
    pub fn finish_failure(&self, message: String) -> Vec<SessionChange> {
        let mut changes = self.update(|s| {
            s.phase = SessionPhase::Failed;
            s.last_error = Some(message.clone());
        });
        changes.extend(self.update(|s| s.reset()));
        changes
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

// Cheaply cloneable for sharing across threads
impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            change_tx: self.change_tx.clone(),
        }
    }
}
