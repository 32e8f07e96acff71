// SPDX-License-Identifier: GPL-3.0-only

use crate::camera::{CameraState, CameraSystemConstraints};
use crate::constants::{
    AspectRatio, CaptureMode, ConcurrentCameraMode, DarkMode, FlashMode, LensFacing,
    StabilizationMode, StreamConfig, VideoQuality,
};
use serde::{Deserialize, Serialize};

/// Messages processed by the capture controller
///
/// Camera-side updates and user actions share one stream so the controller
/// applies them strictly in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "message", rename_all = "snake_case")]
pub enum Message {
    // ===== Camera side =====
    ConstraintsChanged { constraints: CameraSystemConstraints },
    CameraStateChanged { state: CameraState },
    /// Settings were changed outside the controller; reload them
    SettingsReloaded,

    // ===== Quick settings =====
    SetFlashMode { mode: FlashMode },
    SetAspectRatio { ratio: AspectRatio },
    SetCaptureMode { mode: CaptureMode },
    SetStreamConfig { config: StreamConfig },
    SetStabilizationMode { mode: StabilizationMode },
    SetVideoQuality { quality: VideoQuality },
    SetTargetFrameRate { fps: u32 },
    SetConcurrentCameraMode { mode: ConcurrentCameraMode },
    SetLensFacing { lens: LensFacing },
    FlipLens,
    ToggleHdr,
    SetAudioEnabled { enabled: bool },
    SetDarkMode { mode: DarkMode },
    SetMaxVideoDuration { duration_ms: Option<u64> },

    // ===== Capture =====
    SetZoomRatio { ratio: f32 },
    TakePicture,
    StartVideoRecording,
    StopVideoRecording,

    // ===== Feedback =====
    DismissSnackbar { id: u64 },
}
