// SPDX-License-Identifier: GPL-3.0-only

//! Commands sent to the camera system

use crate::config::CameraAppSettings;
use crate::constants::{
    AspectRatio, CaptureMode, ConcurrentCameraMode, DynamicRange, FlashMode, ImageOutputFormat,
    LensFacing, StabilizationMode, StreamConfig, VideoQuality,
};
use serde::{Deserialize, Serialize};

/// A request for the camera to change its configuration or capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CameraCommand {
    SetLensFacing { lens: LensFacing },
    SetFlashMode { mode: FlashMode },
    SetCaptureMode { mode: CaptureMode },
    SetAspectRatio { ratio: AspectRatio },
    SetStreamConfig { config: StreamConfig },
    SetStabilizationMode { mode: StabilizationMode },
    SetDynamicRange { range: DynamicRange },
    SetImageFormat { format: ImageOutputFormat },
    SetVideoQuality { quality: VideoQuality },
    SetTargetFrameRate { fps: u32 },
    SetConcurrentCameraMode { mode: ConcurrentCameraMode },
    SetAudioEnabled { enabled: bool },
    SetMaxVideoDuration { duration_ms: Option<u64> },
    SetZoomRatio { lens: LensFacing, ratio: f32 },
    TakePicture,
    StartVideoRecording,
    StopVideoRecording,
}

/// Commands that move a camera configured for `old` to `new`
///
/// Ordered so the lens switch comes first; the remaining options are applied
/// to the newly selected lens.
pub fn diff_settings(old: &CameraAppSettings, new: &CameraAppSettings) -> Vec<CameraCommand> {
    let mut commands = Vec::new();

    if old.camera_lens_facing != new.camera_lens_facing {
        commands.push(CameraCommand::SetLensFacing {
            lens: new.camera_lens_facing,
        });
    }
    if old.concurrent_camera_mode != new.concurrent_camera_mode {
        commands.push(CameraCommand::SetConcurrentCameraMode {
            mode: new.concurrent_camera_mode,
        });
    }
    if old.capture_mode != new.capture_mode {
        commands.push(CameraCommand::SetCaptureMode {
            mode: new.capture_mode,
        });
    }
    if old.stream_config != new.stream_config {
        commands.push(CameraCommand::SetStreamConfig {
            config: new.stream_config,
        });
    }
    if old.aspect_ratio != new.aspect_ratio {
        commands.push(CameraCommand::SetAspectRatio {
            ratio: new.aspect_ratio,
        });
    }
    if old.flash_mode != new.flash_mode {
        commands.push(CameraCommand::SetFlashMode {
            mode: new.flash_mode,
        });
    }
    if old.dynamic_range != new.dynamic_range {
        commands.push(CameraCommand::SetDynamicRange {
            range: new.dynamic_range,
        });
    }
    if old.image_format != new.image_format {
        commands.push(CameraCommand::SetImageFormat {
            format: new.image_format,
        });
    }
    if old.stabilization_mode != new.stabilization_mode {
        commands.push(CameraCommand::SetStabilizationMode {
            mode: new.stabilization_mode,
        });
    }
    if old.target_frame_rate != new.target_frame_rate {
        commands.push(CameraCommand::SetTargetFrameRate {
            fps: new.target_frame_rate,
        });
    }
    if old.video_quality != new.video_quality {
        commands.push(CameraCommand::SetVideoQuality {
            quality: new.video_quality,
        });
    }
    if old.audio_enabled != new.audio_enabled {
        commands.push(CameraCommand::SetAudioEnabled {
            enabled: new.audio_enabled,
        });
    }
    if old.max_video_duration_ms != new.max_video_duration_ms {
        commands.push(CameraCommand::SetMaxVideoDuration {
            duration_ms: new.max_video_duration_ms,
        });
    }

    commands
}
