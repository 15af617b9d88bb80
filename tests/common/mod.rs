//! Shared test doubles for the widget integration tests.
//!
//! `RecordingSurface` is a hand-rolled render surface that logs every call
//! so tests can assert on the exact observable effects of a transition.

#![allow(dead_code)]

use bytes::Bytes;
use std::sync::{Arc, Mutex};
use updrop::ui::{RenderSurface, Severity};

/// One observed call against the surface, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ShowFileInfo { name: String, size_display: String },
    ClearFileInfo,
    ProgressVisible(bool),
    SubmitEnabled(bool),
    DropHighlight(bool),
    Notification { message: String, severity: Severity },
    HideNotification,
    Download { file_name: String, payload: Bytes },
}

/// Render surface that records everything and displays nothing.
#[derive(Default)]
pub struct RecordingSurface {
    calls: Mutex<Vec<SurfaceCall>>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All calls observed so far, oldest first.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Forget everything observed so far. Used to discard the controller's
    /// construction-time surface sync.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Notifications in arrival order.
    pub fn notifications(&self) -> Vec<(String, Severity)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SurfaceCall::Notification { message, severity } => Some((message, severity)),
                _ => None,
            })
            .collect()
    }

    /// Notifications of one severity only.
    pub fn notifications_with(&self, severity: Severity) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|(_, s)| *s == severity)
            .map(|(message, _)| message)
            .collect()
    }

    /// Downloads delivered to the surface.
    pub fn downloads(&self) -> Vec<(String, Bytes)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SurfaceCall::Download { file_name, payload } => Some((file_name, payload)),
                _ => None,
            })
            .collect()
    }

    /// Latest submit-affordance state, if it was ever toggled.
    pub fn last_submit_enabled(&self) -> Option<bool> {
        self.calls().into_iter().rev().find_map(|call| match call {
            SurfaceCall::SubmitEnabled(enabled) => Some(enabled),
            _ => None,
        })
    }

    /// Latest progress-indicator state, if it was ever toggled.
    pub fn last_progress_visible(&self) -> Option<bool> {
        self.calls().into_iter().rev().find_map(|call| match call {
            SurfaceCall::ProgressVisible(visible) => Some(visible),
            _ => None,
        })
    }

    /// Number of times the notification was hidden.
    pub fn hide_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::HideNotification))
            .count()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RenderSurface for RecordingSurface {
    fn show_file_info(&self, name: &str, size_display: &str) {
        self.record(SurfaceCall::ShowFileInfo {
            name: name.to_string(),
            size_display: size_display.to_string(),
        });
    }

    fn clear_file_info(&self) {
        self.record(SurfaceCall::ClearFileInfo);
    }

    fn set_progress_visible(&self, visible: bool) {
        self.record(SurfaceCall::ProgressVisible(visible));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.record(SurfaceCall::SubmitEnabled(enabled));
    }

    fn set_drop_highlight(&self, active: bool) {
        self.record(SurfaceCall::DropHighlight(active));
    }

    fn show_notification(&self, message: &str, severity: Severity) {
        self.record(SurfaceCall::Notification {
            message: message.to_string(),
            severity,
        });
    }

    fn hide_notification(&self) {
        self.record(SurfaceCall::HideNotification);
    }

    fn trigger_download(&self, file_name: &str, payload: Bytes) {
        self.record(SurfaceCall::Download {
            file_name: file_name.to_string(),
            payload,
        });
    }
}
