// SPDX-License-Identifier: GPL-3.0-only

use super::{
    DerivedUiState, DisabledReason, SingleSelectableUiState, StateInputs, check_selection,
    ordered_options,
};
use crate::constants::{STABILIZATION_MAX_FRAME_RATE, order};
use serde::Serialize;

pub(crate) const CONCERN: &str = "frame rate";

/// Target frame rate picker state (0 = auto)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FrameRateUiState {
    Unavailable,
    Available {
        selected_frame_rate: u32,
        available_frame_rates: Vec<SingleSelectableUiState<u32>>,
    },
}

impl FrameRateUiState {
    #[track_caller]
    pub fn available(
        selected_frame_rate: u32,
        available_frame_rates: Vec<SingleSelectableUiState<u32>>,
    ) -> Self {
        check_selection(CONCERN, selected_frame_rate, &available_frame_rates);
        FrameRateUiState::Available {
            selected_frame_rate,
            available_frame_rates,
        }
    }

    pub fn selected(&self) -> Option<u32> {
        match self {
            FrameRateUiState::Unavailable => None,
            FrameRateUiState::Available {
                selected_frame_rate,
                ..
            } => Some(*selected_frame_rate),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<u32>] {
        match self {
            FrameRateUiState::Unavailable => &[],
            FrameRateUiState::Available {
                available_frame_rates,
                ..
            } => available_frame_rates,
        }
    }
}

fn frame_rate_options(inputs: &StateInputs<'_>) -> Option<Vec<SingleSelectableUiState<u32>>> {
    let lens = inputs.lens_constraints()?;
    let cropping = inputs.settings.stabilization_mode.limits_frame_rate();
    let options = ordered_options(&order::FRAME_RATES, &lens.frame_rates())
        .into_iter()
        .map(|fps| {
            if cropping && fps > STABILIZATION_MAX_FRAME_RATE {
                SingleSelectableUiState::disabled(
                    fps,
                    DisabledReason::FrameRateUnsupportedWithStabilization,
                )
            } else {
                SingleSelectableUiState::selectable(fps)
            }
        })
        .collect();
    Some(options)
}

impl DerivedUiState for FrameRateUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        match frame_rate_options(inputs) {
            Some(options) if options.len() >= 2 => {
                Self::available(inputs.settings.target_frame_rate, options)
            }
            _ => FrameRateUiState::Unavailable,
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        match (self, frame_rate_options(inputs)) {
            (
                FrameRateUiState::Available {
                    selected_frame_rate,
                    available_frame_rates,
                },
                Some(options),
            ) if *available_frame_rates == options => {
                let selected = inputs.settings.target_frame_rate;
                (selected != *selected_frame_rate).then(|| Self::available(selected, options))
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
    use crate::ui_state::TestInputs;
    use std::collections::BTreeSet;
    use crate::camera::{CameraState, CameraSystemConstraints};
    use crate::config::CameraAppSettings;
    use crate::constants::{ExternalCaptureMode, StabilizationMode};

    #[test]
    fn test_cropping_stabilization_greys_out_60fps() {
        let system = CameraSystemConstraints::example();
        let camera_state = CameraState::default();
        let settings = CameraAppSettings {
            stabilization_mode: StabilizationMode::On,
            target_frame_rate: 30,
            ..Default::default()
        };
        let state = FrameRateUiState::derive(&StateInputs::new(
            &settings,
            &system,
            &camera_state,
            ExternalCaptureMode::Standard,
        ));
        assert_eq!(state.selected(), Some(30));
        let values: Vec<_> = state.options().iter().map(|o| o.value()).collect();
        assert_eq!(values, vec![0, 15, 30, 60]);
        assert_eq!(
            state.options()[3].disabled_reason(),
            Some(DisabledReason::FrameRateUnsupportedWithStabilization)
        );
    }

    #[test]
    fn test_auto_only_lens_is_unavailable() {
        let mut fixture = TestInputs::new();
        fixture.back_lens().supported_fixed_frame_rates = BTreeSet::new();
        assert_eq!(
            FrameRateUiState::derive(&fixture.inputs()),
            FrameRateUiState::Unavailable
        );
    }

    #[test]
    fn test_unchanged_inputs_reconcile_to_none() {
        let mut fixture = TestInputs::new();
        let state = FrameRateUiState::derive(&fixture.inputs());
        assert!(state.reconcile(&fixture.inputs()).is_none());

        fixture.settings.target_frame_rate = 15;
        let next = state
            .reconcile(&fixture.inputs())
            .expect("frame rate changed");
        assert_eq!(next.selected(), Some(15));
        assert_eq!(next.options(), state.options());
    }
}
