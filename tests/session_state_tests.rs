//! Integration tests for the SessionManager change events.
//!
//! These verify that the manager:
//! - emits the right events for each transition helper
//! - supports multiple subscribers
//! - keeps the session invariants across a full upload cycle
//! - folds terminal phases back into `Idle` without retaining them

use bytes::Bytes;
use std::sync::Arc;
use tokio::time::{Duration, timeout};
use updrop::{CandidateFile, SessionChange, SessionManager, SessionPhase};

fn md_file(name: &str) -> CandidateFile {
    CandidateFile::new(name, Bytes::from_static(b"# test"))
}

async fn next_event(rx: &mut tokio::sync::broadcast::Receiver<SessionChange>) -> SessionChange {
    timeout(Duration::from_millis(100), rx.recv())
        .await
        .expect("timeout waiting for event")
        .expect("channel closed")
}

#[tokio::test]
async fn test_select_file_emits_event() {
    let manager = Arc::new(SessionManager::new());
    let mut rx = manager.subscribe();

    manager.select_file(md_file("notes.md"));

    let event = next_event(&mut rx).await;
    assert_eq!(
        event,
        SessionChange::FileSelected {
            name: "notes.md".to_string(),
            size_bytes: 6,
        }
    );
}

#[tokio::test]
async fn test_success_cycle_event_sequence() {
    let manager = Arc::new(SessionManager::new());
    let mut rx = manager.subscribe();

    manager.select_file(md_file("notes.md"));
    manager.begin_upload();
    manager.finish_success();

    assert!(matches!(
        next_event(&mut rx).await,
        SessionChange::FileSelected { .. }
    ));
    assert_eq!(
        next_event(&mut rx).await,
        SessionChange::UploadStarted {
            name: "notes.md".to_string()
        }
    );
    assert_eq!(
        next_event(&mut rx).await,
        SessionChange::UploadSucceeded {
            download_name: "processed_notes.md".to_string()
        }
    );
    assert_eq!(next_event(&mut rx).await, SessionChange::SessionReset);

    let session = manager.snapshot();
    assert_eq!(session.phase, SessionPhase::Idle);
    assert!(session.invariants_hold());
}

#[tokio::test]
async fn test_failure_cycle_resets_without_retention() {
    let manager = Arc::new(SessionManager::new());
    let mut rx = manager.subscribe();

    manager.select_file(md_file("notes.md"));
    manager.begin_upload();
    manager.finish_failure("Upload failed: server returned status 500".to_string());

    assert!(matches!(
        next_event(&mut rx).await,
        SessionChange::FileSelected { .. }
    ));
    assert!(matches!(
        next_event(&mut rx).await,
        SessionChange::UploadStarted { .. }
    ));

    match next_event(&mut rx).await {
        SessionChange::UploadFailed { message } => {
            assert!(message.contains("500"));
        }
        other => panic!("expected UploadFailed, got: {other:?}"),
    }
    assert_eq!(next_event(&mut rx).await, SessionChange::SessionReset);

    // The failure is observable through the event only; the session itself
    // is idle again with nothing retained.
    let session = manager.snapshot();
    assert_eq!(session.phase, SessionPhase::Idle);
    assert!(session.last_error.is_none());
    assert!(session.file.is_none());
    assert!(session.invariants_hold());
}

#[tokio::test]
async fn test_remove_emits_selection_cleared() {
    let manager = Arc::new(SessionManager::new());
    manager.select_file(md_file("notes.md"));

    let mut rx = manager.subscribe();
    manager.clear_selection();

    assert_eq!(next_event(&mut rx).await, SessionChange::SelectionCleared);
}

#[tokio::test]
async fn test_last_offer_wins_emits_for_each_selection() {
    let manager = Arc::new(SessionManager::new());
    let mut rx = manager.subscribe();

    manager.select_file(md_file("first.md"));
    manager.select_file(md_file("second.md"));

    assert!(matches!(
        next_event(&mut rx).await,
        SessionChange::FileSelected { name, .. } if name == "first.md"
    ));
    assert!(matches!(
        next_event(&mut rx).await,
        SessionChange::FileSelected { name, .. } if name == "second.md"
    ));

    assert_eq!(
        manager.read(|s| s.file.as_ref().unwrap().name.clone()),
        "second.md"
    );
}

#[tokio::test]
async fn test_multiple_subscribers_receive_events() {
    let manager = Arc::new(SessionManager::new());
    let mut rx1 = manager.subscribe();
    let mut rx2 = manager.subscribe();

    manager.select_file(md_file("notes.md"));

    assert!(matches!(
        next_event(&mut rx1).await,
        SessionChange::FileSelected { .. }
    ));
    assert!(matches!(
        next_event(&mut rx2).await,
        SessionChange::FileSelected { .. }
    ));
}

#[tokio::test]
async fn test_invariants_hold_at_every_step() {
    let manager = Arc::new(SessionManager::new());
    assert!(manager.read(|s| s.invariants_hold()));

    manager.select_file(md_file("notes.md"));
    assert!(manager.read(|s| s.invariants_hold()));

    manager.begin_upload();
    assert!(manager.read(|s| s.invariants_hold()));

    manager.finish_failure("boom".to_string());
    assert!(manager.read(|s| s.invariants_hold()));

    manager.select_file(md_file("retry.md"));
    assert!(manager.read(|s| s.invariants_hold()));

    manager.begin_upload();
    manager.finish_success();
    assert!(manager.read(|s| s.invariants_hold()));
}
