// SPDX-License-Identifier: GPL-3.0-only

//! Live camera runtime state
//!
//! Snapshots pushed by the camera side whenever something it controls
//! changes: zoom, low light boost, the stabilization it actually applied and
//! the recording lifecycle.

use crate::constants::{LensFacing, StabilizationMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Low light boost state machine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LowLightBoostState {
    /// Boost is not brightening the scene
    #[default]
    Inactive,
    /// Boost is active with the given strength (0.0 - 1.0)
    Active { strength: f32 },
    /// Boost failed and was turned off by the camera
    Error,
}

impl LowLightBoostState {
    pub fn is_active(&self) -> bool {
        matches!(self, LowLightBoostState::Active { .. })
    }

    pub fn strength(&self) -> f32 {
        match self {
            LowLightBoostState::Active { strength } => strength.clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Recording state machine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VideoRecordingState {
    /// Not recording
    #[default]
    Inactive,
    /// Recording requested, first frame not yet written
    Starting,
    /// Actively recording
    Active {
        /// Time recorded so far
        elapsed_ms: u64,
        /// Latest microphone amplitude (0.0 - 1.0)
        audio_amplitude: f64,
        /// Whether the recording is paused
        paused: bool,
    },
}

impl VideoRecordingState {
    /// Check if a recording is starting or running
    pub fn is_recording(&self) -> bool {
        !matches!(self, VideoRecordingState::Inactive)
    }

    pub fn elapsed_ms(&self) -> u64 {
        match self {
            VideoRecordingState::Active { elapsed_ms, .. } => *elapsed_ms,
            _ => 0,
        }
    }

    pub fn audio_amplitude(&self) -> f64 {
        match self {
            VideoRecordingState::Active {
                audio_amplitude, ..
            } => audio_amplitude.clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Snapshot of the running camera
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraState {
    /// Whether the preview is bound and running
    pub is_camera_running: bool,
    /// Current zoom ratio for each lens the camera has opened
    pub zoom_ratios: BTreeMap<LensFacing, f32>,
    pub low_light_boost_state: LowLightBoostState,
    /// Stabilization the camera actually applied (may differ from the request)
    pub applied_stabilization: Option<StabilizationMode>,
    pub video_recording_state: VideoRecordingState,
}

impl CameraState {
    pub fn zoom_ratio(&self, lens: LensFacing) -> Option<f32> {
        self.zoom_ratios.get(&lens).copied()
    }
}
