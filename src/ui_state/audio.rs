// SPDX-License-Identifier: GPL-3.0-only

use super::{DerivedUiState, StateInputs};
use crate::constants::CaptureMode;
use serde::Serialize;

/// Microphone toggle and level meter state
///
/// The amplitude is a runtime annotation; toggling mute keeps the current
/// amplitude and an amplitude tick keeps the mute flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AudioUiState {
    /// Photo-only mode records no audio
    Unavailable,
    Enabled { muted: bool, amplitude: f64 },
}

impl DerivedUiState for AudioUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        if inputs.settings.capture_mode == CaptureMode::ImageOnly {
            return AudioUiState::Unavailable;
        }
        let muted = !inputs.settings.audio_enabled;
        AudioUiState::Enabled {
            muted,
            amplitude: if muted {
                0.0
            } else {
                inputs.camera_state.video_recording_state.audio_amplitude()
            },
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let next = Self::derive(inputs);
        (next != *self).then_some(next)
    }
}
