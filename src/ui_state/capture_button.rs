// SPDX-License-Identifier: GPL-3.0-only

use super::{DerivedUiState, StateInputs};
use crate::constants::CaptureMode;
use serde::Serialize;

/// What pressing the shutter does right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShutterAction {
    TakePicture,
    StartRecording,
    StopRecording,
}

/// Shutter button state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaptureButtonUiState {
    /// Camera not running yet
    Unavailable,
    Enabled {
        capture_mode: CaptureMode,
        is_recording: bool,
        /// Action on a short press
        press_action: ShutterAction,
        /// Action on a long press, if any
        long_press_action: Option<ShutterAction>,
    },
}

impl CaptureButtonUiState {
    pub fn allows(&self, action: ShutterAction) -> bool {
        match self {
            CaptureButtonUiState::Unavailable => false,
            CaptureButtonUiState::Enabled {
                press_action,
                long_press_action,
                ..
            } => *press_action == action || *long_press_action == Some(action),
        }
    }
}

impl DerivedUiState for CaptureButtonUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        if !inputs.camera_state.is_camera_running {
            return CaptureButtonUiState::Unavailable;
        }
        let capture_mode = inputs.settings.capture_mode;
        let is_recording = inputs.camera_state.video_recording_state.is_recording();

        let (press_action, long_press_action) = if is_recording {
            (ShutterAction::StopRecording, None)
        } else {
            match capture_mode {
                CaptureMode::Standard => (
                    ShutterAction::TakePicture,
                    Some(ShutterAction::StartRecording),
                ),
                CaptureMode::ImageOnly => (ShutterAction::TakePicture, None),
                CaptureMode::VideoOnly => (ShutterAction::StartRecording, None),
            }
        };

        CaptureButtonUiState::Enabled {
            capture_mode,
            is_recording,
            press_action,
            long_press_action,
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let next = Self::derive(inputs);
        (next != *self).then_some(next)
    }
}
