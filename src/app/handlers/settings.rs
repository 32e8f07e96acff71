// SPDX-License-Identifier: GPL-3.0-only

//! Quick settings handlers
//!
//! Every change is checked against the option list the user was shown, so a
//! stale tap on a control that has since been greyed out is rejected instead
//! of reaching the camera.

use super::require_selectable;
use crate::app::state::CaptureController;
use crate::constants::{
    AspectRatio, CaptureMode, ConcurrentCameraMode, DarkMode, DynamicRange, FlashMode,
    ImageOutputFormat, LensFacing, StabilizationMode, StreamConfig, VideoQuality,
};
use crate::errors::{ActionError, AppResult};
use crate::ui_state::{
    AudioUiState, ReadyCaptureUiState, aspect_ratio, capture_mode, concurrent_camera, flash,
    flip_lens, frame_rate, stabilization, stream_config, video_quality,
};
use tracing::info;

impl CaptureController {
    /// Derived state of a ready screen, or `NotReady`
    ///
    /// Concerns are shared, so the copy only bumps reference counts.
    fn ready_ui_state(&self) -> Result<ReadyCaptureUiState, ActionError> {
        self.ui_state.ready().cloned().ok_or(ActionError::NotReady)
    }

    // =========================================================================
    // Option Handlers
    // =========================================================================

    pub(crate) fn handle_set_flash_mode(&mut self, mode: FlashMode) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(flash::CONCERN, ready.flash_mode.options(), mode)?;
        info!(mode = mode.display_name(), "Setting flash mode");
        self.update_settings(|settings| settings.flash_mode = mode)
    }

    pub(crate) fn handle_set_aspect_ratio(&mut self, ratio: AspectRatio) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(aspect_ratio::CONCERN, ready.aspect_ratio.options(), ratio)?;
        info!(ratio = ratio.display_name(), "Setting aspect ratio");
        self.update_settings(|settings| settings.aspect_ratio = ratio)
    }

    pub(crate) fn handle_set_capture_mode(&mut self, mode: CaptureMode) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(capture_mode::CONCERN, ready.capture_mode.options(), mode)?;
        info!(mode = mode.display_name(), "Setting capture mode");
        self.update_settings(|settings| settings.capture_mode = mode)
    }

    pub(crate) fn handle_set_stream_config(&mut self, config: StreamConfig) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(stream_config::CONCERN, ready.stream_config.options(), config)?;
        info!(config = config.display_name(), "Setting stream config");
        self.update_settings(|settings| settings.stream_config = config)
    }

    pub(crate) fn handle_set_stabilization_mode(
        &mut self,
        mode: StabilizationMode,
    ) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(stabilization::CONCERN, ready.stabilization.options(), mode)?;
        info!(mode = mode.display_name(), "Setting stabilization mode");
        self.update_settings(|settings| settings.stabilization_mode = mode)
    }

    pub(crate) fn handle_set_video_quality(&mut self, quality: VideoQuality) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(video_quality::CONCERN, ready.video_quality.options(), quality)?;
        info!(quality = quality.display_name(), "Setting video quality");
        self.update_settings(|settings| settings.video_quality = quality)
    }

    pub(crate) fn handle_set_target_frame_rate(&mut self, fps: u32) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(frame_rate::CONCERN, ready.frame_rate.options(), fps)?;
        info!(fps, "Setting target frame rate");
        self.update_settings(|settings| settings.target_frame_rate = fps)
    }

    pub(crate) fn handle_set_concurrent_camera_mode(
        &mut self,
        mode: ConcurrentCameraMode,
    ) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(
            concurrent_camera::CONCERN,
            ready.concurrent_camera.options(),
            mode,
        )?;
        info!(mode = mode.display_name(), "Setting concurrent camera mode");
        self.update_settings(|settings| settings.concurrent_camera_mode = mode)
    }

    // =========================================================================
    // Lens Handlers
    // =========================================================================

    pub(crate) fn handle_set_lens_facing(&mut self, lens: LensFacing) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        require_selectable(flip_lens::CONCERN, ready.flip_lens.options(), lens)?;
        info!(lens = lens.display_name(), "Switching lens");
        self.update_settings(|settings| settings.camera_lens_facing = lens)
    }

    pub(crate) fn handle_flip_lens(&mut self) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        let target = ready
            .flip_lens
            .flip_target()
            .ok_or(ActionError::Unavailable {
                concern: flip_lens::CONCERN,
            })?;
        info!(lens = target.display_name(), "Flipping lens");
        self.update_settings(|settings| settings.camera_lens_facing = target)
    }

    // =========================================================================
    // HDR Handlers
    // =========================================================================

    /// Switch every offered HDR half on, or every half off when any is on
    pub(crate) fn handle_toggle_hdr(&mut self) -> AppResult<()> {
        let hdr = self.ready_ui_state()?.hdr;
        let unavailable = ActionError::Unavailable { concern: "HDR" };

        if hdr.is_hdr_on() {
            info!("Turning HDR off");
            return self.update_settings(|settings| {
                settings.dynamic_range = DynamicRange::Sdr;
                settings.image_format = ImageOutputFormat::Jpeg;
            });
        }

        let dynamic_range = hdr.hdr_dynamic_range();
        let image_format = hdr.hdr_image_format();
        if dynamic_range.is_none() && image_format.is_none() {
            return Err(unavailable.into());
        }
        info!(?dynamic_range, ?image_format, "Turning HDR on");
        self.update_settings(|settings| {
            if let Some(range) = dynamic_range {
                settings.dynamic_range = range;
            }
            if let Some(format) = image_format {
                settings.image_format = format;
            }
        })
    }

    // =========================================================================
    // Audio and Preference Handlers
    // =========================================================================

    pub(crate) fn handle_set_audio_enabled(&mut self, enabled: bool) -> AppResult<()> {
        let ready = self.ready_ui_state()?;
        if *ready.audio == AudioUiState::Unavailable {
            return Err(ActionError::Unavailable { concern: "audio" }.into());
        }
        info!(enabled, "Setting audio recording");
        self.update_settings(|settings| settings.audio_enabled = enabled)
    }

    /// Theme preference, accepted before the camera is ready
    pub(crate) fn handle_set_dark_mode(&mut self, mode: DarkMode) -> AppResult<()> {
        info!(mode = mode.display_name(), "Setting theme preference");
        self.update_settings(|settings| settings.dark_mode = mode)
    }

    pub(crate) fn handle_set_max_video_duration(
        &mut self,
        duration_ms: Option<u64>,
    ) -> AppResult<()> {
        info!(?duration_ms, "Setting maximum video duration");
        self.update_settings(|settings| settings.max_video_duration_ms = duration_ms)
    }
}
