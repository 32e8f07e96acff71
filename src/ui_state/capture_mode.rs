// SPDX-License-Identifier: GPL-3.0-only

//! Capture mode toggle state
//!
//! All three modes are always listed. External capture requests and dual
//! camera grey out the modes they cannot serve.

use super::{DerivedUiState, DisabledReason, SingleSelectableUiState, StateInputs, check_selection};
use crate::constants::{CaptureMode, ConcurrentCameraMode, ExternalCaptureMode, order};
use serde::Serialize;

pub(crate) const CONCERN: &str = "capture mode";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaptureModeUiState {
    Unavailable,
    Available {
        selected_capture_mode: CaptureMode,
        available_capture_modes: Vec<SingleSelectableUiState<CaptureMode>>,
    },
}

impl CaptureModeUiState {
    #[track_caller]
    pub fn available(
        selected_capture_mode: CaptureMode,
        available_capture_modes: Vec<SingleSelectableUiState<CaptureMode>>,
    ) -> Self {
        check_selection(CONCERN, selected_capture_mode, &available_capture_modes);
        CaptureModeUiState::Available {
            selected_capture_mode,
            available_capture_modes,
        }
    }

    pub fn selected(&self) -> Option<CaptureMode> {
        match self {
            CaptureModeUiState::Unavailable => None,
            CaptureModeUiState::Available {
                selected_capture_mode,
                ..
            } => Some(*selected_capture_mode),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<CaptureMode>] {
        match self {
            CaptureModeUiState::Unavailable => &[],
            CaptureModeUiState::Available {
                available_capture_modes,
                ..
            } => available_capture_modes,
        }
    }
}

fn disabled_reason(mode: CaptureMode, inputs: &StateInputs<'_>) -> Option<DisabledReason> {
    let external = match (inputs.external_capture_mode, mode) {
        (
            ExternalCaptureMode::ImageCapture | ExternalCaptureMode::MultipleImageCapture,
            CaptureMode::VideoOnly,
        ) => Some(DisabledReason::VideoCaptureExternalUnsupported),
        (ExternalCaptureMode::VideoCapture, CaptureMode::ImageOnly) => {
            Some(DisabledReason::ImageCaptureExternalUnsupported)
        }
        (ExternalCaptureMode::Standard, _) | (_, CaptureMode::ImageOnly | CaptureMode::VideoOnly) => {
            None
        }
        (_, CaptureMode::Standard) => Some(DisabledReason::StandardCaptureExternalUnsupported),
    };

    external.or_else(|| {
        (mode == CaptureMode::ImageOnly
            && inputs.settings.concurrent_camera_mode == ConcurrentCameraMode::Dual)
            .then_some(DisabledReason::ImageCaptureUnsupportedConcurrentCamera)
    })
}

fn capture_mode_options(inputs: &StateInputs<'_>) -> Vec<SingleSelectableUiState<CaptureMode>> {
    order::CAPTURE_MODES
        .iter()
        .map(|mode| match disabled_reason(*mode, inputs) {
            Some(reason) => SingleSelectableUiState::disabled(*mode, reason),
            None => SingleSelectableUiState::selectable(*mode),
        })
        .collect()
}

impl DerivedUiState for CaptureModeUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        let options = capture_mode_options(inputs);
        if options.len() < 2 {
            return CaptureModeUiState::Unavailable;
        }
        Self::available(inputs.settings.capture_mode, options)
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let options = capture_mode_options(inputs);
        match self {
            CaptureModeUiState::Available {
                selected_capture_mode,
                available_capture_modes,
            } if *available_capture_modes == options => {
                let selected = inputs.settings.capture_mode;
                (selected != *selected_capture_mode)
                    .then(|| Self::available(selected, options))
            }
            _ => {
                let next = Self::derive(inputs);
                (next != *self).then_some(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraState, CameraSystemConstraints};
    use crate::config::CameraAppSettings;

    fn derive_with(settings: &CameraAppSettings, external: ExternalCaptureMode) -> CaptureModeUiState {
        let system = CameraSystemConstraints::example();
        let camera_state = CameraState::default();
        CaptureModeUiState::derive(&StateInputs::new(settings, &system, &camera_state, external))
    }

    #[test]
    fn test_external_image_request_greys_out_video() {
        let settings = CameraAppSettings {
            capture_mode: CaptureMode::ImageOnly,
            ..Default::default()
        };
        let state = derive_with(&settings, ExternalCaptureMode::ImageCapture);
        let options = state.options();
        assert_eq!(
            options[0].disabled_reason(),
            Some(DisabledReason::StandardCaptureExternalUnsupported)
        );
        assert_eq!(
            options[1].disabled_reason(),
            Some(DisabledReason::VideoCaptureExternalUnsupported)
        );
        assert!(options[2].is_selectable());
    }

    #[test]
    fn test_dual_camera_greys_out_image_only() {
        let settings = CameraAppSettings {
            concurrent_camera_mode: ConcurrentCameraMode::Dual,
            ..Default::default()
        };
        let state = derive_with(&settings, ExternalCaptureMode::Standard);
        assert_eq!(state.selected(), Some(CaptureMode::Standard));
        assert_eq!(
            state.options()[2].disabled_reason(),
            Some(DisabledReason::ImageCaptureUnsupportedConcurrentCamera)
        );
    }

    #[test]
    #[should_panic(expected = "capture mode")]
    fn test_disabled_selection_panics() {
        let settings = CameraAppSettings {
            capture_mode: CaptureMode::Standard,
            ..Default::default()
        };
        derive_with(&settings, ExternalCaptureMode::VideoCapture);
    }
}
