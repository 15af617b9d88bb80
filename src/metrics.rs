// Performance metrics module
//
// Lightweight counters for observing widget activity without locks.
// These are diagnostics, not an error-reporting pipeline: failures still
// surface to the user exclusively through notifications.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Process-wide metrics instance.
pub static METRICS: LazyLock<Metrics> = LazyLock::new(Metrics::new);

/// Widget activity counters.
///
/// Uses atomic operations for thread-safe tracking. Collected throughout the
/// widget lifecycle and logged on shutdown for debugging.
#[derive(Debug)]
pub struct Metrics {
    /// Files offered via picker or drop
    pub files_offered: AtomicUsize,

    /// Offers rejected by the validator
    pub validation_rejections: AtomicUsize,

    /// Uploads started (network exchange issued)
    pub uploads_started: AtomicUsize,

    /// Uploads that completed with a 2xx payload
    pub uploads_succeeded: AtomicUsize,

    /// Uploads that failed (non-2xx or transport error)
    pub uploads_failed: AtomicUsize,

    /// Downloads handed to the surface
    pub downloads_triggered: AtomicUsize,

    /// Notifications posted (any severity)
    pub notifications_posted: AtomicU64,

    /// Session mutations applied through the state manager
    pub state_updates: AtomicU64,

    /// Change events broadcast to subscribers
    pub state_broadcasts: AtomicU64,

    /// Widget start time
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            files_offered: AtomicUsize::new(0),
            validation_rejections: AtomicUsize::new(0),
            uploads_started: AtomicUsize::new(0),
            uploads_succeeded: AtomicUsize::new(0),
            uploads_failed: AtomicUsize::new(0),
            downloads_triggered: AtomicUsize::new(0),
            notifications_posted: AtomicU64::new(0),
            state_updates: AtomicU64::new(0),
            state_broadcasts: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_file_offered(&self) {
        self.files_offered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_rejection(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upload_started(&self) {
        self.uploads_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upload_succeeded(&self) {
        self.uploads_succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upload_failed(&self) {
        self.uploads_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_download_triggered(&self) {
        self.downloads_triggered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notification(&self) {
        self.notifications_posted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_state_update(&self) {
        self.state_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_state_broadcast(&self) {
        self.state_broadcasts.fetch_add(1, Ordering::Relaxed);
    }

    /// Total uptime of this widget instance.
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log a metrics summary, typically on shutdown.
    pub fn log_summary(&self) {
        tracing::info!("=== Widget Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Offers: {} ({} rejected by validation)",
            self.files_offered.load(Ordering::Relaxed),
            self.validation_rejections.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Uploads: {} started, {} succeeded, {} failed",
            self.uploads_started.load(Ordering::Relaxed),
            self.uploads_succeeded.load(Ordering::Relaxed),
            self.uploads_failed.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Downloads: {}, notifications: {}",
            self.downloads_triggered.load(Ordering::Relaxed),
            self.notifications_posted.load(Ordering::Relaxed)
        );
        tracing::info!(
            "State updates: {}, broadcasts: {}",
            self.state_updates.load(Ordering::Relaxed),
            self.state_broadcasts.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
