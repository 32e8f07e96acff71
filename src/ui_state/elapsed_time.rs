// SPDX-License-Identifier: GPL-3.0-only

use super::{DerivedUiState, StateInputs};
use crate::camera::VideoRecordingState;
use crate::constants::format_elapsed;
use serde::Serialize;

/// Recording timer state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ElapsedTimeUiState {
    /// Not recording
    Unavailable,
    Enabled {
        elapsed_ms: u64,
        /// Remaining time when a maximum duration is set
        remaining_ms: Option<u64>,
    },
}

impl ElapsedTimeUiState {
    /// Timer text, `MM:SS`
    pub fn display(&self) -> Option<String> {
        match self {
            ElapsedTimeUiState::Unavailable => None,
            ElapsedTimeUiState::Enabled { elapsed_ms, .. } => Some(format_elapsed(*elapsed_ms)),
        }
    }
}

impl DerivedUiState for ElapsedTimeUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        match inputs.camera_state.video_recording_state {
            VideoRecordingState::Inactive => ElapsedTimeUiState::Unavailable,
            recording => {
                let elapsed_ms = recording.elapsed_ms();
                ElapsedTimeUiState::Enabled {
                    elapsed_ms,
                    remaining_ms: inputs
                        .settings
                        .max_video_duration_ms
                        .map(|max| max.saturating_sub(elapsed_ms)),
                }
            }
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let next = Self::derive(inputs);
        (next != *self).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_state::TestInputs;

    fn recording(elapsed_ms: u64, audio_amplitude: f64) -> VideoRecordingState {
        VideoRecordingState::Active {
            elapsed_ms,
            audio_amplitude,
            paused: false,
        }
    }

    #[test]
    fn test_idle_is_unavailable() {
        let fixture = TestInputs::new();
        let state = ElapsedTimeUiState::derive(&fixture.inputs());
        assert_eq!(state, ElapsedTimeUiState::Unavailable);
        assert_eq!(state.display(), None);
    }

    #[test]
    fn test_reconcile_follows_elapsed_time() {
        let mut fixture = TestInputs::new();
        fixture.settings.max_video_duration_ms = Some(10_000);
        fixture.camera_state.video_recording_state = recording(4_000, 0.1);
        let state = ElapsedTimeUiState::derive(&fixture.inputs());
        assert_eq!(
            state,
            ElapsedTimeUiState::Enabled {
                elapsed_ms: 4_000,
                remaining_ms: Some(6_000)
            }
        );

        // Amplitude is not part of the timer
        fixture.camera_state.video_recording_state = recording(4_000, 0.8);
        assert!(state.reconcile(&fixture.inputs()).is_none());

        fixture.camera_state.video_recording_state = recording(12_000, 0.8);
        let next = state
            .reconcile(&fixture.inputs())
            .expect("time advanced");
        assert_eq!(next.display().as_deref(), Some("00:12"));
        assert!(matches!(
            next,
            ElapsedTimeUiState::Enabled {
                remaining_ms: Some(0),
                ..
            }
        ));
    }
}
