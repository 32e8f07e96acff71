// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all controller messages by routing them to focused handler methods.
//! The main `update()` function acts as a dispatcher, while specific handlers are implemented
//! in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::camera`: Constraints, camera state, settings reloads, snackbars
//! - `handlers::settings`: Quick settings, lens selection, HDR, audio
//! - `handlers::capture`: Photo capture, video recording, zoom

use crate::app::message::Message;
use crate::app::state::CaptureController;
use crate::errors::AppResult;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

impl CaptureController {
    /// Main message handler - routes messages to appropriate handler methods.
    ///
    /// A rejected user action leaves settings and UI state untouched.
    pub fn update(&mut self, message: Message) -> AppResult<()> {
        match message {
            // ===== Camera Side =====
            Message::ConstraintsChanged { constraints } => {
                self.handle_constraints_changed(constraints)
            }
            Message::CameraStateChanged { state } => self.handle_camera_state_changed(state),
            Message::SettingsReloaded => self.handle_settings_reloaded(),

            // ===== Quick Settings =====
            Message::SetFlashMode { mode } => self.handle_set_flash_mode(mode),
            Message::SetAspectRatio { ratio } => self.handle_set_aspect_ratio(ratio),
            Message::SetCaptureMode { mode } => self.handle_set_capture_mode(mode),
            Message::SetStreamConfig { config } => self.handle_set_stream_config(config),
            Message::SetStabilizationMode { mode } => self.handle_set_stabilization_mode(mode),
            Message::SetVideoQuality { quality } => self.handle_set_video_quality(quality),
            Message::SetTargetFrameRate { fps } => self.handle_set_target_frame_rate(fps),
            Message::SetConcurrentCameraMode { mode } => {
                self.handle_set_concurrent_camera_mode(mode)
            }
            Message::SetLensFacing { lens } => self.handle_set_lens_facing(lens),
            Message::FlipLens => self.handle_flip_lens(),
            Message::ToggleHdr => self.handle_toggle_hdr(),
            Message::SetAudioEnabled { enabled } => self.handle_set_audio_enabled(enabled),
            Message::SetDarkMode { mode } => self.handle_set_dark_mode(mode),
            Message::SetMaxVideoDuration { duration_ms } => {
                self.handle_set_max_video_duration(duration_ms)
            }

            // ===== Capture =====
            Message::SetZoomRatio { ratio } => self.handle_set_zoom_ratio(ratio),
            Message::TakePicture => self.handle_take_picture(),
            Message::StartVideoRecording => self.handle_start_video_recording(),
            Message::StopVideoRecording => self.handle_stop_video_recording(),

            // ===== Feedback =====
            Message::DismissSnackbar { id } => self.handle_dismiss_snackbar(id),
        }
    }

    /// Process messages until every sender is dropped
    ///
    /// Failed messages are logged and skipped; the loop only ends when the
    /// channel closes. The controller is handed back for inspection.
    pub async fn run(mut self, mut messages: mpsc::UnboundedReceiver<Message>) -> Self {
        info!("Capture controller started");
        while let Some(message) = messages.recv().await {
            debug!(?message, "Processing message");
            if let Err(e) = self.update(message) {
                warn!(error = %e, "Message rejected");
            }
        }
        info!("Message channel closed, capture controller stopped");
        self
    }
}
