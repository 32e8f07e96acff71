// SPDX-License-Identifier: GPL-3.0-only

//! Video stabilization state
//!
//! Cropping modes (On, High Quality) cannot sustain a locked frame rate
//! above 30 fps and are greyed out when one is set. The mode the camera
//! actually applied is carried as a runtime annotation, since Auto resolves
//! to a concrete mode only once the session is configured.

use super::{
    DerivedUiState, DisabledReason, SingleSelectableUiState, StateInputs, check_selection,
    ordered_options,
};
use crate::constants::{STABILIZATION_MAX_FRAME_RATE, StabilizationMode, order};
use serde::Serialize;

pub(crate) const CONCERN: &str = "stabilization";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StabilizationUiState {
    Unavailable,
    Available {
        selected_stabilization_mode: StabilizationMode,
        available_stabilization_modes: Vec<SingleSelectableUiState<StabilizationMode>>,
        /// What the camera is running with, once known
        applied_stabilization_mode: Option<StabilizationMode>,
    },
}

impl StabilizationUiState {
    #[track_caller]
    pub fn available(
        selected_stabilization_mode: StabilizationMode,
        available_stabilization_modes: Vec<SingleSelectableUiState<StabilizationMode>>,
        applied_stabilization_mode: Option<StabilizationMode>,
    ) -> Self {
        check_selection(
            CONCERN,
            selected_stabilization_mode,
            &available_stabilization_modes,
        );
        StabilizationUiState::Available {
            selected_stabilization_mode,
            available_stabilization_modes,
            applied_stabilization_mode,
        }
    }

    pub fn selected(&self) -> Option<StabilizationMode> {
        match self {
            StabilizationUiState::Unavailable => None,
            StabilizationUiState::Available {
                selected_stabilization_mode,
                ..
            } => Some(*selected_stabilization_mode),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<StabilizationMode>] {
        match self {
            StabilizationUiState::Unavailable => &[],
            StabilizationUiState::Available {
                available_stabilization_modes,
                ..
            } => available_stabilization_modes,
        }
    }

    /// Whether the camera reports stabilization running
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            StabilizationUiState::Available {
                applied_stabilization_mode: Some(mode),
                ..
            } if *mode != StabilizationMode::Off
        )
    }
}

fn stabilization_options(
    inputs: &StateInputs<'_>,
) -> Option<Vec<SingleSelectableUiState<StabilizationMode>>> {
    let lens = inputs.lens_constraints()?;
    let high_frame_rate = inputs.settings.target_frame_rate > STABILIZATION_MAX_FRAME_RATE;
    let options = ordered_options(&order::STABILIZATION_MODES, &lens.stabilization_modes())
        .into_iter()
        .map(|mode| {
            if high_frame_rate && mode.limits_frame_rate() {
                SingleSelectableUiState::disabled(
                    mode,
                    DisabledReason::StabilizationUnsupportedAtFrameRate,
                )
            } else {
                SingleSelectableUiState::selectable(mode)
            }
        })
        .collect();
    Some(options)
}

impl DerivedUiState for StabilizationUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        match stabilization_options(inputs) {
            Some(options) if options.len() >= 2 => Self::available(
                inputs.settings.stabilization_mode,
                options,
                inputs.camera_state.applied_stabilization,
            ),
            _ => StabilizationUiState::Unavailable,
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        match (self, stabilization_options(inputs)) {
            (
                StabilizationUiState::Available {
                    selected_stabilization_mode,
                    available_stabilization_modes,
                    applied_stabilization_mode,
                },
                Some(options),
            ) if *available_stabilization_modes == options => {
                let selected = inputs.settings.stabilization_mode;
                let applied = inputs.camera_state.applied_stabilization;
                if selected == *selected_stabilization_mode && applied == *applied_stabilization_mode
                {
                    return None;
                }
                Some(Self::available(selected, options, applied))
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

    #[test]
    fn test_off_only_lens_is_unavailable() {
        let mut fixture = TestInputs::new();
        fixture.settings.stabilization_mode = StabilizationMode::Off;
        fixture.back_lens().supported_stabilization_modes = BTreeSet::new();
        assert_eq!(
            StabilizationUiState::derive(&fixture.inputs()),
            StabilizationUiState::Unavailable
        );
    }

    #[test]
    fn test_unchanged_inputs_reconcile_to_none() {
        let fixture = TestInputs::new();
        let state = StabilizationUiState::derive(&fixture.inputs());
        assert_eq!(state.options().len(), 4);
        assert!(state.reconcile(&fixture.inputs()).is_none());
    }

    #[test]
    fn test_applied_mode_only_updates_annotation() {
        let mut fixture = TestInputs::new();
        fixture.settings.stabilization_mode = StabilizationMode::Auto;
        let state = StabilizationUiState::derive(&fixture.inputs());
        assert!(!state.is_active());

        fixture.camera_state.applied_stabilization = Some(StabilizationMode::On);
        let next = state
            .reconcile(&fixture.inputs())
            .expect("applied mode changed");

        assert_eq!(next.options(), state.options());
        assert_eq!(next.selected(), Some(StabilizationMode::Auto));
        assert!(next.is_active());
        assert!(matches!(
            next,
            StabilizationUiState::Available {
                applied_stabilization_mode: Some(StabilizationMode::On),
                ..
            }
        ));
        assert!(next.reconcile(&fixture.inputs()).is_none());
    }
}
