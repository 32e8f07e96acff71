// SPDX-License-Identifier: GPL-3.0-only

use super::{
    DerivedUiState, SingleSelectableUiState, StateInputs, all_selectable, check_selection,
    option_values, ordered_options,
};
use crate::constants::{LensFacing, order};
use serde::Serialize;
use std::collections::BTreeSet;

pub(crate) const CONCERN: &str = "lens facing";

/// Lens flip button state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlipLensUiState {
    /// Only one lens on the device
    Unavailable,
    Available {
        selected_lens_facing: LensFacing,
        available_lens_facings: Vec<SingleSelectableUiState<LensFacing>>,
    },
}

impl FlipLensUiState {
    #[track_caller]
    pub fn available(
        selected_lens_facing: LensFacing,
        available_lens_facings: Vec<SingleSelectableUiState<LensFacing>>,
    ) -> Self {
        check_selection(CONCERN, selected_lens_facing, &available_lens_facings);
        FlipLensUiState::Available {
            selected_lens_facing,
            available_lens_facings,
        }
    }

    pub fn selected(&self) -> Option<LensFacing> {
        match self {
            FlipLensUiState::Unavailable => None,
            FlipLensUiState::Available {
                selected_lens_facing,
                ..
            } => Some(*selected_lens_facing),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<LensFacing>] {
        match self {
            FlipLensUiState::Unavailable => &[],
            FlipLensUiState::Available {
                available_lens_facings,
                ..
            } => available_lens_facings,
        }
    }

    /// Lens a flip would switch to
    pub fn flip_target(&self) -> Option<LensFacing> {
        let FlipLensUiState::Available {
            selected_lens_facing,
            available_lens_facings,
        } = self
        else {
            return None;
        };
        let target = selected_lens_facing.flipped();
        super::is_selectable(available_lens_facings, target).then_some(target)
    }
}

fn lens_options(inputs: &StateInputs<'_>) -> Vec<LensFacing> {
    let lenses: BTreeSet<LensFacing> = inputs
        .system_constraints
        .available_lenses
        .iter()
        .copied()
        .collect();
    ordered_options(&order::LENS_FACINGS, &lenses)
}

impl DerivedUiState for FlipLensUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        let lenses = lens_options(inputs);
        if lenses.len() < 2 {
            return FlipLensUiState::Unavailable;
        }
        Self::available(inputs.settings.camera_lens_facing, all_selectable(&lenses))
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        match self {
            FlipLensUiState::Available {
                selected_lens_facing,
                available_lens_facings,
            } if option_values(available_lens_facings) == lens_options(inputs) => {
                let selected = inputs.settings.camera_lens_facing;
                (selected != *selected_lens_facing)
                    .then(|| Self::available(selected, available_lens_facings.clone()))
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

    #[test]
    fn test_single_lens_is_unavailable() {
        let mut fixture = TestInputs::new();
        fixture.system.available_lenses = vec![LensFacing::Back];
        assert_eq!(
            FlipLensUiState::derive(&fixture.inputs()),
            FlipLensUiState::Unavailable
        );

        // A lens listed twice is still one lens
        fixture.system.available_lenses = vec![LensFacing::Back, LensFacing::Back];
        assert_eq!(
            FlipLensUiState::derive(&fixture.inputs()),
            FlipLensUiState::Unavailable
        );
    }

    #[test]
    fn test_reconcile_and_flip_target() {
        let mut fixture = TestInputs::new();
        let state = FlipLensUiState::derive(&fixture.inputs());
        assert_eq!(state.flip_target(), Some(LensFacing::Front));
        assert!(state.reconcile(&fixture.inputs()).is_none());

        fixture.settings.camera_lens_facing = LensFacing::Front;
        let next = state
            .reconcile(&fixture.inputs())
            .expect("lens changed");
        assert_eq!(next.selected(), Some(LensFacing::Front));
        assert_eq!(next.flip_target(), Some(LensFacing::Back));
        assert_eq!(next.options(), state.options());
    }
}
