// SPDX-License-Identifier: GPL-3.0-only

use super::{
    DerivedUiState, SingleSelectableUiState, StateInputs, all_selectable, check_selection,
    option_values,
};
use crate::constants::{AspectRatio, order};
use serde::Serialize;

pub(crate) const CONCERN: &str = "aspect ratio";

/// Aspect ratio picker state
///
/// Every lens can crop to every ratio, so the option list only depends on
/// the canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AspectRatioUiState {
    Unavailable,
    Available {
        selected_aspect_ratio: AspectRatio,
        available_aspect_ratios: Vec<SingleSelectableUiState<AspectRatio>>,
    },
}

impl AspectRatioUiState {
    #[track_caller]
    pub fn available(
        selected_aspect_ratio: AspectRatio,
        available_aspect_ratios: Vec<SingleSelectableUiState<AspectRatio>>,
    ) -> Self {
        check_selection(CONCERN, selected_aspect_ratio, &available_aspect_ratios);
        AspectRatioUiState::Available {
            selected_aspect_ratio,
            available_aspect_ratios,
        }
    }

    /// Picker over `ratios`, hidden when there is nothing to choose between
    pub fn create_from(selected: AspectRatio, ratios: &[AspectRatio]) -> Self {
        if ratios.len() < 2 {
            return AspectRatioUiState::Unavailable;
        }
        Self::available(selected, all_selectable(ratios))
    }

    pub fn selected(&self) -> Option<AspectRatio> {
        match self {
            AspectRatioUiState::Unavailable => None,
            AspectRatioUiState::Available {
                selected_aspect_ratio,
                ..
            } => Some(*selected_aspect_ratio),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<AspectRatio>] {
        match self {
            AspectRatioUiState::Unavailable => &[],
            AspectRatioUiState::Available {
                available_aspect_ratios,
                ..
            } => available_aspect_ratios,
        }
    }
}

impl DerivedUiState for AspectRatioUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        Self::create_from(inputs.settings.aspect_ratio, &order::ASPECT_RATIOS)
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        match self {
            AspectRatioUiState::Available {
                selected_aspect_ratio,
                available_aspect_ratios,
            } if option_values(available_aspect_ratios) == order::ASPECT_RATIOS => {
                let selected = inputs.settings.aspect_ratio;
                (selected != *selected_aspect_ratio)
                    .then(|| Self::available(selected, available_aspect_ratios.clone()))
            }
            _ => {
                let next = Self::derive(inputs);
                (next != *self).then_some(next)
            }
        }
    }
}
