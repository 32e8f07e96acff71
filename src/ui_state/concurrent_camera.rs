// SPDX-License-Identifier: GPL-3.0-only

use super::{
    DerivedUiState, DisabledReason, SingleSelectableUiState, StateInputs, check_selection,
    ordered_options,
};
use crate::constants::{CaptureMode, ConcurrentCameraMode, ExternalCaptureMode, order};
use serde::Serialize;

pub(crate) const CONCERN: &str = "concurrent camera";

/// Dual camera toggle state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConcurrentCameraUiState {
    /// The device cannot stream two lenses at once
    Unavailable,
    Available {
        selected_concurrent_camera_mode: ConcurrentCameraMode,
        available_concurrent_camera_modes: Vec<SingleSelectableUiState<ConcurrentCameraMode>>,
    },
}

impl ConcurrentCameraUiState {
    #[track_caller]
    pub fn available(
        selected_concurrent_camera_mode: ConcurrentCameraMode,
        available_concurrent_camera_modes: Vec<SingleSelectableUiState<ConcurrentCameraMode>>,
    ) -> Self {
        check_selection(
            CONCERN,
            selected_concurrent_camera_mode,
            &available_concurrent_camera_modes,
        );
        ConcurrentCameraUiState::Available {
            selected_concurrent_camera_mode,
            available_concurrent_camera_modes,
        }
    }

    pub fn selected(&self) -> Option<ConcurrentCameraMode> {
        match self {
            ConcurrentCameraUiState::Unavailable => None,
            ConcurrentCameraUiState::Available {
                selected_concurrent_camera_mode,
                ..
            } => Some(*selected_concurrent_camera_mode),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<ConcurrentCameraMode>] {
        match self {
            ConcurrentCameraUiState::Unavailable => &[],
            ConcurrentCameraUiState::Available {
                available_concurrent_camera_modes,
                ..
            } => available_concurrent_camera_modes,
        }
    }
}

fn dual_disabled_reason(inputs: &StateInputs<'_>) -> Option<DisabledReason> {
    if inputs.external_capture_mode != ExternalCaptureMode::Standard {
        Some(DisabledReason::ConcurrentCameraUnsupportedExternal)
    } else if inputs.settings.capture_mode == CaptureMode::ImageOnly {
        Some(DisabledReason::ConcurrentCameraUnsupportedImageOnly)
    } else if inputs.settings.is_hdr_enabled() {
        Some(DisabledReason::HdrUnsupportedConcurrentCamera)
    } else {
        None
    }
}

fn concurrent_options(
    inputs: &StateInputs<'_>,
) -> Vec<SingleSelectableUiState<ConcurrentCameraMode>> {
    let supported = inputs.system_constraints.concurrent_camera_modes();
    ordered_options(&order::CONCURRENT_CAMERA_MODES, &supported)
        .into_iter()
        .map(|mode| match mode {
            ConcurrentCameraMode::Dual => match dual_disabled_reason(inputs) {
                Some(reason) => SingleSelectableUiState::disabled(mode, reason),
                None => SingleSelectableUiState::selectable(mode),
            },
            ConcurrentCameraMode::Off => SingleSelectableUiState::selectable(mode),
        })
        .collect()
}

impl DerivedUiState for ConcurrentCameraUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        let options = concurrent_options(inputs);
        if options.len() < 2 {
            return ConcurrentCameraUiState::Unavailable;
        }
        Self::available(inputs.settings.concurrent_camera_mode, options)
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let options = concurrent_options(inputs);
        match self {
            ConcurrentCameraUiState::Available {
                selected_concurrent_camera_mode,
                available_concurrent_camera_modes,
            } if *available_concurrent_camera_modes == options => {
                let selected = inputs.settings.concurrent_camera_mode;
                (selected != *selected_concurrent_camera_mode)
                    .then(|| Self::available(selected, options))
            }
            _ => {
                let next = Self::derive(inputs);
                (next != *self).then_some(next)
            }
        }
    }
}
