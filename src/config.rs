// SPDX-License-Identifier: GPL-3.0-only

use crate::camera::CameraSystemConstraints;
use crate::constants::{
    AspectRatio, CaptureMode, ConcurrentCameraMode, DarkMode, DynamicRange, ExternalCaptureMode,
    FRAME_RATE_AUTO, FlashMode, ImageOutputFormat, LensFacing, STABILIZATION_MAX_FRAME_RATE,
    StabilizationMode, StreamConfig, VideoQuality, order,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// User settings that persist between application runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraAppSettings {
    /// Lens the capture screen opens with
    pub camera_lens_facing: LensFacing,
    /// Application theme preference (System, Dark, Light)
    pub dark_mode: DarkMode,
    pub flash_mode: FlashMode,
    pub capture_mode: CaptureMode,
    pub aspect_ratio: AspectRatio,
    pub stream_config: StreamConfig,
    pub stabilization_mode: StabilizationMode,
    /// Video dynamic range (HDR video when HLG10)
    pub dynamic_range: DynamicRange,
    /// Still image format (HDR photos when Ultra HDR)
    pub image_format: ImageOutputFormat,
    pub video_quality: VideoQuality,
    /// Locked frame rate, 0 lets the camera choose
    pub target_frame_rate: u32,
    pub concurrent_camera_mode: ConcurrentCameraMode,
    /// Record audio with video
    pub audio_enabled: bool,
    /// Zoom ratio each lens starts at
    pub default_zoom_ratios: BTreeMap<LensFacing, f32>,
    /// Recording stops automatically after this long
    pub max_video_duration_ms: Option<u64>,
}

impl Default for CameraAppSettings {
    fn default() -> Self {
        Self {
            camera_lens_facing: LensFacing::default(),
            dark_mode: DarkMode::default(),
            flash_mode: FlashMode::default(),
            capture_mode: CaptureMode::default(),
            aspect_ratio: AspectRatio::default(),
            stream_config: StreamConfig::default(),
            stabilization_mode: StabilizationMode::default(),
            dynamic_range: DynamicRange::default(),
            image_format: ImageOutputFormat::default(),
            video_quality: VideoQuality::default(),
            target_frame_rate: FRAME_RATE_AUTO,
            concurrent_camera_mode: ConcurrentCameraMode::default(),
            audio_enabled: true,
            default_zoom_ratios: BTreeMap::new(),
            max_video_duration_ms: None,
        }
    }
}

impl CameraAppSettings {
    /// Either HDR half is switched on
    pub fn is_hdr_enabled(&self) -> bool {
        self.dynamic_range != DynamicRange::Sdr || self.image_format != ImageOutputFormat::Jpeg
    }

    /// Bring the settings in line with what the camera system supports
    ///
    /// Reconcilers treat a selection outside its option list as a bug, so
    /// every settings snapshot is passed through here before it reaches
    /// them. Unsupported values fall back to their baseline; option pairs
    /// that exclude each other resolve in favour of the capture mode and
    /// HDR. The result is a fixed point: constraining it again changes
    /// nothing.
    pub fn constrained_to(
        &self,
        system: &CameraSystemConstraints,
        external_mode: ExternalCaptureMode,
    ) -> CameraAppSettings {
        let mut next = self.clone();

        if !system.has_lens(next.camera_lens_facing) {
            if let Some(first) = system.available_lenses.first() {
                next.camera_lens_facing = *first;
            }
        }

        if let Some(forced) = external_mode.forced_capture_mode() {
            next.capture_mode = forced;
        }

        if let Some(lens) = system.for_lens(next.camera_lens_facing) {
            if !lens.flash_modes().contains(&next.flash_mode) {
                next.flash_mode = FlashMode::Off;
            }
            if !lens.dynamic_ranges().contains(&next.dynamic_range) {
                next.dynamic_range = DynamicRange::Sdr;
            }
            if !lens.image_formats().contains(&next.image_format) {
                next.image_format = ImageOutputFormat::Jpeg;
            }
            if !lens.stabilization_modes().contains(&next.stabilization_mode) {
                next.stabilization_mode = StabilizationMode::Off;
            }
            if !lens.frame_rates().contains(&next.target_frame_rate)
                || !order::FRAME_RATES.contains(&next.target_frame_rate)
            {
                next.target_frame_rate = FRAME_RATE_AUTO;
            }
            if !lens.video_qualities().contains(&next.video_quality) {
                next.video_quality = VideoQuality::Unspecified;
            }
            if !lens.stream_configs().contains(&next.stream_config) {
                next.stream_config = StreamConfig::MultipleStreams;
            }
            if let Some(range) = lens.supported_zoom_range {
                if let Some(ratio) = next.default_zoom_ratios.get_mut(&next.camera_lens_facing) {
                    *ratio = range.clamp(*ratio);
                }
            }
        }

        match next.capture_mode {
            CaptureMode::ImageOnly => next.dynamic_range = DynamicRange::Sdr,
            CaptureMode::VideoOnly => next.image_format = ImageOutputFormat::Jpeg,
            CaptureMode::Standard => {}
        }

        if next.stabilization_mode.limits_frame_rate()
            && next.target_frame_rate > STABILIZATION_MAX_FRAME_RATE
        {
            next.stabilization_mode = StabilizationMode::Off;
        }

        if next.concurrent_camera_mode == ConcurrentCameraMode::Dual {
            let conflicting = !system
                .concurrent_camera_modes()
                .contains(&ConcurrentCameraMode::Dual)
                || external_mode != ExternalCaptureMode::Standard
                || next.capture_mode == CaptureMode::ImageOnly
                || next.is_hdr_enabled();
            if conflicting {
                next.concurrent_camera_mode = ConcurrentCameraMode::Off;
            }
        }

        if next != *self {
            debug!(before = ?self, after = ?next, "Settings constrained to camera support");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_values_fall_back() {
        let system = CameraSystemConstraints::example();
        let settings = CameraAppSettings {
            camera_lens_facing: LensFacing::Front,
            flash_mode: FlashMode::Auto,
            dynamic_range: DynamicRange::Hlg10,
            target_frame_rate: 60,
            video_quality: VideoQuality::Uhd,
            ..Default::default()
        };

        let constrained = settings.constrained_to(&system, ExternalCaptureMode::Standard);
        assert_eq!(constrained.flash_mode, FlashMode::Off);
        assert_eq!(constrained.dynamic_range, DynamicRange::Sdr);
        assert_eq!(constrained.target_frame_rate, FRAME_RATE_AUTO);
        assert_eq!(constrained.video_quality, VideoQuality::Unspecified);
    }

    #[test]
    fn test_missing_lens_uses_first_available() {
        let mut system = CameraSystemConstraints::example();
        system.available_lenses = vec![LensFacing::Back];
        let settings = CameraAppSettings {
            camera_lens_facing: LensFacing::Front,
            ..Default::default()
        };
        let constrained = settings.constrained_to(&system, ExternalCaptureMode::Standard);
        assert_eq!(constrained.camera_lens_facing, LensFacing::Back);
    }

    #[test]
    fn test_external_mode_forces_capture_mode() {
        let system = CameraSystemConstraints::example();
        let settings = CameraAppSettings {
            dynamic_range: DynamicRange::Hlg10,
            ..Default::default()
        };
        let constrained = settings.constrained_to(&system, ExternalCaptureMode::ImageCapture);
        assert_eq!(constrained.capture_mode, CaptureMode::ImageOnly);
        assert_eq!(constrained.dynamic_range, DynamicRange::Sdr);
    }

    #[test]
    fn test_dual_camera_conflicts_turn_it_off() {
        let system = CameraSystemConstraints::example();
        let settings = CameraAppSettings {
            concurrent_camera_mode: ConcurrentCameraMode::Dual,
            image_format: ImageOutputFormat::JpegUltraHdr,
            ..Default::default()
        };
        let constrained = settings.constrained_to(&system, ExternalCaptureMode::Standard);
        assert_eq!(constrained.concurrent_camera_mode, ConcurrentCameraMode::Off);
        assert_eq!(constrained.image_format, ImageOutputFormat::JpegUltraHdr);
    }

    #[test]
    fn test_stabilization_yields_to_high_frame_rate() {
        let system = CameraSystemConstraints::example();
        let settings = CameraAppSettings {
            stabilization_mode: StabilizationMode::HighQuality,
            target_frame_rate: 60,
            ..Default::default()
        };
        let constrained = settings.constrained_to(&system, ExternalCaptureMode::Standard);
        assert_eq!(constrained.stabilization_mode, StabilizationMode::Off);
        assert_eq!(constrained.target_frame_rate, 60);
    }

    #[test]
    fn test_constrained_is_fixed_point() {
        let system = CameraSystemConstraints::example();
        let settings = CameraAppSettings {
            camera_lens_facing: LensFacing::Front,
            flash_mode: FlashMode::LowLightBoost,
            capture_mode: CaptureMode::VideoOnly,
            image_format: ImageOutputFormat::JpegUltraHdr,
            concurrent_camera_mode: ConcurrentCameraMode::Dual,
            default_zoom_ratios: BTreeMap::from([(LensFacing::Front, 9.0)]),
            ..Default::default()
        };
        for mode in [
            ExternalCaptureMode::Standard,
            ExternalCaptureMode::ImageCapture,
            ExternalCaptureMode::VideoCapture,
        ] {
            let once = settings.constrained_to(&system, mode);
            assert_eq!(once.constrained_to(&system, mode), once);
        }
    }
}
