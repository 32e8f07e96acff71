// SPDX-License-Identifier: GPL-3.0-only

//! Flash mode UI state
//!
//! The flash control offers the lens's flash modes in the order
//! Off, On, Auto, Low Light Boost. The low light boost state reported by the
//! camera rides along as a runtime annotation so the control can show how
//! strongly the boost is brightening the scene.

use super::{
    DerivedUiState, SingleSelectableUiState, StateInputs, all_selectable, check_selection,
    ordered_options,
};
use crate::camera::LowLightBoostState;
use crate::constants::{FlashMode, order};
use serde::Serialize;
use std::collections::BTreeSet;

pub(crate) const CONCERN: &str = "flash mode";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlashModeUiState {
    /// The lens offers nothing to choose between
    Unavailable,
    Available {
        selected_flash_mode: FlashMode,
        available_flash_modes: Vec<SingleSelectableUiState<FlashMode>>,
        low_light_boost: LowLightBoostState,
    },
}

impl FlashModeUiState {
    /// Build the available variant
    ///
    /// # Panics
    ///
    /// If `selected_flash_mode` is not a selectable entry of
    /// `available_flash_modes`.
    #[track_caller]
    pub fn available(
        selected_flash_mode: FlashMode,
        available_flash_modes: Vec<SingleSelectableUiState<FlashMode>>,
        low_light_boost: LowLightBoostState,
    ) -> Self {
        check_selection(CONCERN, selected_flash_mode, &available_flash_modes);
        FlashModeUiState::Available {
            selected_flash_mode,
            available_flash_modes,
            low_light_boost,
        }
    }

    /// Derive the state from a selection and the lens's supported modes
    pub fn create_from(
        selected_flash_mode: FlashMode,
        supported_flash_modes: &BTreeSet<FlashMode>,
        low_light_boost: LowLightBoostState,
    ) -> Self {
        let modes = ordered_options(&order::FLASH_MODES, supported_flash_modes);
        if modes.len() < 2 {
            return FlashModeUiState::Unavailable;
        }
        Self::available(selected_flash_mode, all_selectable(&modes), low_light_boost)
    }

    pub fn selected(&self) -> Option<FlashMode> {
        match self {
            FlashModeUiState::Unavailable => None,
            FlashModeUiState::Available {
                selected_flash_mode,
                ..
            } => Some(*selected_flash_mode),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<FlashMode>] {
        match self {
            FlashModeUiState::Unavailable => &[],
            FlashModeUiState::Available {
                available_flash_modes,
                ..
            } => available_flash_modes,
        }
    }

    /// Whether low light boost is selected and currently brightening
    pub fn is_low_light_boost_active(&self) -> bool {
        matches!(
            self,
            FlashModeUiState::Available {
                selected_flash_mode: FlashMode::LowLightBoost,
                low_light_boost: LowLightBoostState::Active { .. },
                ..
            }
        )
    }
}

impl DerivedUiState for FlashModeUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        match inputs.lens_constraints() {
            Some(lens) => Self::create_from(
                inputs.settings.flash_mode,
                &lens.flash_modes(),
                inputs.camera_state.low_light_boost_state,
            ),
            None => FlashModeUiState::Unavailable,
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let FlashModeUiState::Available {
            selected_flash_mode,
            available_flash_modes,
            low_light_boost,
        } = self
        else {
            let next = Self::derive(inputs);
            return (next != *self).then_some(next);
        };

        let Some(lens) = inputs.lens_constraints() else {
            return Some(FlashModeUiState::Unavailable);
        };

        let supported = ordered_options(&order::FLASH_MODES, &lens.flash_modes());
        let current: Vec<FlashMode> = available_flash_modes.iter().map(|o| o.value()).collect();
        if current != supported {
            return Some(Self::derive(inputs));
        }

        let selected = inputs.settings.flash_mode;
        let boost = inputs.camera_state.low_light_boost_state;
        if selected == *selected_flash_mode && boost == *low_light_boost {
            return None;
        }
        Some(Self::available(
            selected,
            available_flash_modes.clone(),
            boost,
        ))
    }
}
