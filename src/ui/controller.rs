// Session Controller - drives the upload session state machine
//
// This module contains the SessionController which coordinates between:
// - the host's rendering surface (RenderSurface trait)
// - SessionManager (session state + change events)
// - the Validator (services::validation)
// - the upload transport (services::upload)
// - the Notifier (transient notifications)
//
// It owns the reaction to every user intent: file offered, file removed,
// submit, and the two drag hover signals.

use crate::metrics::METRICS;
use crate::models::{CandidateFile, UploadConfig, format_size};
use crate::services::upload::UploadTransport;
use crate::services::validation::{self, ValidationError};
use crate::state::SessionManager;
use crate::ui::notify::Notifier;
use crate::ui::surface::{RenderSurface, Severity};
use std::sync::Arc;

/// Coordinates the single upload session.
///
/// The controller is the only component that mutates the session, and it does
/// so exclusively in response to intents. Every transition's side effects
/// (metadata panel, progress indicator, submit affordance, notifications,
/// download delivery) go through the injected [`RenderSurface`].
///
/// # Example
/// ```ignore
/// let session = Arc::new(SessionManager::new());
/// let config = Arc::new(UploadConfig::default());
/// let transport = Arc::new(HttpUploadClient::new(endpoint));
/// let surface: Arc<dyn RenderSurface> = Arc::new(MySurface::new());
///
/// let controller = SessionController::new(
///     session, config, transport, surface, runtime.handle().clone(),
/// );
/// controller.offer_file(file);
/// runtime.block_on(controller.submit());
/// ```
pub struct SessionController {
    /// Shared session state manager
    session: Arc<SessionManager>,

    /// Widget configuration (immutable after initialization)
    config: Arc<UploadConfig>,

    /// Network exchange seam
    transport: Arc<dyn UploadTransport>,

    /// The host's rendering surface
    surface: Arc<dyn RenderSurface>,

    /// Transient notification emitter
    notifier: Notifier,
}

impl SessionController {
    /// Create a controller and bring the surface in line with the (idle)
    /// session: no metadata, no progress, submit disabled.
    pub fn new(
        session: Arc<SessionManager>,
        config: Arc<UploadConfig>,
        transport: Arc<dyn UploadTransport>,
        surface: Arc<dyn RenderSurface>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self::sync_surface_with_session(&surface, &session);

        let notifier = Notifier::new(Arc::clone(&surface), runtime);

        tracing::info!(
            max_file_size = config.max_file_size,
            allowed = %config.allowed_extensions_display(),
            "Session controller initialized"
        );

        Self {
            session,
            config,
            transport,
            surface,
            notifier,
        }
    }

    /// Access the session manager, e.g. to subscribe to change events.
    pub fn session(&self) -> Arc<SessionManager> {
        Arc::clone(&self.session)
    }

    /// Initialize the surface from the current session record.
    ///
    /// Called once at construction; a freshly created session is idle, but a
    /// host re-attaching a surface to an existing session gets the same sync.
    fn sync_surface_with_session(surface: &Arc<dyn RenderSurface>, session: &SessionManager) {
        let snapshot = session.snapshot();

        match &snapshot.file {
            Some(file) => {
                surface.show_file_info(&file.name, &format_size(file.size_bytes));
                surface.set_submit_enabled(!snapshot.is_busy());
            }
            None => {
                surface.clear_file_info();
                surface.set_submit_enabled(false);
            }
        }
        surface.set_progress_visible(snapshot.is_busy());

        tracing::debug!("Surface synchronized with session state");
    }

    /// A file arrived from the picker or the drop target; both paths behave
    /// identically.
    ///
    /// On acceptance the candidate becomes the selection (a later offer
    /// replaces an earlier one). On rejection the session returns to idle and
    /// the reason is shown as a single error notification.
    pub fn offer_file(&self, file: CandidateFile) {
        if self.session.read(|s| s.is_busy()) {
            tracing::debug!(name = %file.name, "Ignoring file offer while upload is in flight");
            return;
        }

        METRICS.record_file_offered();

        match validation::validate(Some(&file), &self.config) {
            Ok(()) => {
                tracing::info!(name = %file.name, size_bytes = file.size_bytes, "File accepted");
                self.surface
                    .show_file_info(&file.name, &format_size(file.size_bytes));
                self.surface.set_submit_enabled(true);
                self.session.select_file(file);
            }
            Err(reason) => {
                tracing::warn!(name = %file.name, %reason, "File rejected");
                METRICS.record_validation_rejection();
                self.notifier.post(&reason.to_string(), Severity::Error);
                self.surface.clear_file_info();
                self.surface.set_submit_enabled(false);
                self.session.clear_selection();
            }
        }
    }

    /// The user removed the current selection.
    pub fn remove_file(&self) {
        if self.session.read(|s| s.is_busy()) {
            tracing::debug!("Ignoring remove while upload is in flight");
            return;
        }

        tracing::info!("Selection removed");
        self.surface.clear_file_info();
        self.surface.set_progress_visible(false);
        self.surface.set_submit_enabled(false);
        self.session.clear_selection();
    }

    /// The user submitted the form.
    ///
    /// With no selection this emits one error notification and issues no
    /// network call. Otherwise the session enters `Uploading` (submit
    /// disabled, progress shown) until the exchange resolves; both outcomes
    /// fold the session back to idle with submission re-enabled.
    pub async fn submit(&self) {
        if self.session.read(|s| s.is_busy()) {
            tracing::debug!("Ignoring re-entrant submit");
            return;
        }

        let Some(file) = self.session.read(|s| s.file.clone()) else {
            tracing::warn!("Submit with no file selected");
            self.notifier
                .post(&ValidationError::NoFileSelected.to_string(), Severity::Error);
            return;
        };

        METRICS.record_upload_started();
        self.session.begin_upload();
        self.surface.set_submit_enabled(false);
        self.surface.set_progress_visible(true);
        self.notifier
            .post(&format!("Uploading {}...", file.name), Severity::Info);

        let outcome = self.transport.upload(&file).await;

        match outcome {
            Ok(payload) => {
                let download_name = file.download_name();
                tracing::info!(
                    %download_name,
                    bytes = payload.len(),
                    "Upload succeeded"
                );
                METRICS.record_upload_succeeded();

                // The payload moves into the surface here; the core keeps no
                // reference to release afterwards.
                self.surface.trigger_download(&download_name, payload);
                METRICS.record_download_triggered();

                self.notifier.post(
                    "Processing complete. Your download has started.",
                    Severity::Success,
                );
                self.session.finish_success();
            }
            Err(error) => {
                tracing::error!("Upload failed: {error:#}");
                METRICS.record_upload_failed();

                let message = format!("Upload failed: {error:#}");
                self.notifier.post(&message, Severity::Error);
                self.session.finish_failure(message);
            }
        }

        self.surface.set_progress_visible(false);
        self.surface.set_submit_enabled(true);
    }

    /// A dragged file entered the drop target. Visual feedback only; the
    /// session is untouched.
    pub fn drag_over(&self) {
        self.surface.set_drop_highlight(true);
    }

    /// The dragged file left the drop target (or was dropped). Visual
    /// feedback only; the session is untouched.
    pub fn drag_leave(&self) {
        self.surface.set_drop_highlight(false);
    }
}
