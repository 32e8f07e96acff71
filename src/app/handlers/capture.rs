// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations: photo capture, video recording and zoom

use crate::app::state::CaptureController;
use crate::camera::CameraCommand;
use crate::errors::{ActionError, AppResult};
use crate::ui_state::ZoomUiState;
use crate::ui_state::capture_button::ShutterAction;
use tracing::{debug, info};

impl CaptureController {
    fn require_shutter(&self, action: ShutterAction, what: &'static str) -> AppResult<()> {
        let ui_state = self.ui_state();
        let ready = ui_state.ready().ok_or(ActionError::NotReady)?;
        if !ready.capture_button.allows(action) {
            return Err(ActionError::CaptureRejected(what).into());
        }
        Ok(())
    }

    // =========================================================================
    // Capture Handlers
    // =========================================================================

    pub(crate) fn handle_take_picture(&mut self) -> AppResult<()> {
        self.require_shutter(ShutterAction::TakePicture, "take a picture")?;
        info!("Taking picture");
        self.send_command(CameraCommand::TakePicture)
    }

    pub(crate) fn handle_start_video_recording(&mut self) -> AppResult<()> {
        self.require_shutter(ShutterAction::StartRecording, "start recording")?;
        info!("Starting video recording");
        self.send_command(CameraCommand::StartVideoRecording)
    }

    pub(crate) fn handle_stop_video_recording(&mut self) -> AppResult<()> {
        self.require_shutter(ShutterAction::StopRecording, "stop recording")?;
        info!("Stopping video recording");
        self.send_command(CameraCommand::StopVideoRecording)
    }

    // =========================================================================
    // Zoom Handlers
    // =========================================================================

    /// Request a zoom ratio, clamped to the active lens's range
    ///
    /// The ratio is applied to the camera state right away so the zoom
    /// control follows the gesture; the camera's next state report wins.
    pub(crate) fn handle_set_zoom_ratio(&mut self, ratio: f32) -> AppResult<()> {
        let ui_state = self.ui_state();
        let ready = ui_state.ready().ok_or(ActionError::NotReady)?;
        let ZoomUiState::Enabled { zoom_range, .. } = *ready.zoom else {
            return Err(ActionError::Unavailable { concern: "zoom" }.into());
        };

        let ratio = zoom_range.clamp(ratio);
        let lens = self.settings.camera_lens_facing;
        debug!(lens = lens.display_name(), ratio, "Setting zoom ratio");

        self.camera_state.zoom_ratios.insert(lens, ratio);
        self.refresh();
        self.send_command(CameraCommand::SetZoomRatio { lens, ratio })
    }
}
