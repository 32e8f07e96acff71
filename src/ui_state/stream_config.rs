// SPDX-License-Identifier: GPL-3.0-only

use super::{
    DerivedUiState, SingleSelectableUiState, StateInputs, all_selectable, check_selection,
    option_values, ordered_options,
};
use crate::constants::{StreamConfig, order};
use serde::Serialize;

pub(crate) const CONCERN: &str = "stream config";

/// Single/multi stream picker state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StreamConfigUiState {
    Unavailable,
    Available {
        selected_stream_config: StreamConfig,
        available_stream_configs: Vec<SingleSelectableUiState<StreamConfig>>,
    },
}

impl StreamConfigUiState {
    #[track_caller]
    pub fn available(
        selected_stream_config: StreamConfig,
        available_stream_configs: Vec<SingleSelectableUiState<StreamConfig>>,
    ) -> Self {
        check_selection(CONCERN, selected_stream_config, &available_stream_configs);
        StreamConfigUiState::Available {
            selected_stream_config,
            available_stream_configs,
        }
    }

    pub fn selected(&self) -> Option<StreamConfig> {
        match self {
            StreamConfigUiState::Unavailable => None,
            StreamConfigUiState::Available {
                selected_stream_config,
                ..
            } => Some(*selected_stream_config),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<StreamConfig>] {
        match self {
            StreamConfigUiState::Unavailable => &[],
            StreamConfigUiState::Available {
                available_stream_configs,
                ..
            } => available_stream_configs,
        }
    }
}

fn stream_configs(inputs: &StateInputs<'_>) -> Vec<StreamConfig> {
    inputs
        .lens_constraints()
        .map(|lens| ordered_options(&order::STREAM_CONFIGS, &lens.stream_configs()))
        .unwrap_or_default()
}

impl DerivedUiState for StreamConfigUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        let configs = stream_configs(inputs);
        if configs.len() < 2 {
            return StreamConfigUiState::Unavailable;
        }
        Self::available(inputs.settings.stream_config, all_selectable(&configs))
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        match self {
            StreamConfigUiState::Available {
                selected_stream_config,
                available_stream_configs,
            } if option_values(available_stream_configs) == stream_configs(inputs) => {
                let selected = inputs.settings.stream_config;
                (selected != *selected_stream_config)
                    .then(|| Self::available(selected, available_stream_configs.clone()))
            }
            _ => {
                let next = Self::derive(inputs);
                (next != *self).then_some(next)
            }
        }
    }
}
