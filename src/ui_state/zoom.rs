// SPDX-License-Identifier: GPL-3.0-only

//! Zoom control state
//!
//! Zoom is continuous, so instead of an option list the state carries the
//! lens's range and the current ratio. The ratio comes from the camera when
//! it has reported one, otherwise from the lens's default in settings. The
//! camera clamps ratios itself, so an out-of-range value is clamped here
//! too rather than treated as a broken invariant.

use super::{DerivedUiState, StateInputs};
use crate::camera::ZoomRange;
use crate::constants::zoom;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ZoomUiState {
    /// Fixed focal length lens
    Unavailable,
    Enabled {
        zoom_range: ZoomRange,
        zoom_ratio: f32,
        /// Position of the ratio inside the range (0.0 - 1.0)
        linear_zoom: f32,
        /// Quick-select buttons the lens can reach
        quick_levels: Vec<f32>,
        /// Quick level matching the current ratio, if any
        selected_level: Option<f32>,
    },
}

impl ZoomUiState {
    pub fn create_from(zoom_range: ZoomRange, requested_ratio: f32) -> Self {
        if zoom_range.is_degenerate() {
            return ZoomUiState::Unavailable;
        }
        let zoom_ratio = zoom_range.clamp(requested_ratio);
        let quick_levels: Vec<f32> = zoom::QUICK_LEVELS
            .iter()
            .copied()
            .filter(|level| zoom_range.contains(*level))
            .collect();
        let selected_level = quick_levels
            .iter()
            .copied()
            .find(|level| (level - zoom_ratio).abs() < zoom::RATIO_EPSILON);
        ZoomUiState::Enabled {
            zoom_range,
            zoom_ratio,
            linear_zoom: zoom_range.linear_position(zoom_ratio),
            quick_levels,
            selected_level,
        }
    }

    pub fn zoom_ratio(&self) -> Option<f32> {
        match self {
            ZoomUiState::Unavailable => None,
            ZoomUiState::Enabled { zoom_ratio, .. } => Some(*zoom_ratio),
        }
    }
}

fn requested_ratio(inputs: &StateInputs<'_>) -> f32 {
    let lens = inputs.settings.camera_lens_facing;
    inputs
        .camera_state
        .zoom_ratio(lens)
        .or_else(|| inputs.settings.default_zoom_ratios.get(&lens).copied())
        .unwrap_or(zoom::DEFAULT_RATIO)
}

impl DerivedUiState for ZoomUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        match inputs
            .lens_constraints()
            .and_then(|lens| lens.supported_zoom_range)
        {
            Some(range) => Self::create_from(range, requested_ratio(inputs)),
            None => ZoomUiState::Unavailable,
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let range = inputs
            .lens_constraints()
            .and_then(|lens| lens.supported_zoom_range);
        match (self, range) {
            (
                ZoomUiState::Enabled {
                    zoom_range,
                    zoom_ratio,
                    ..
                },
                Some(range),
            ) if *zoom_range == range => {
                let ratio = range.clamp(requested_ratio(inputs));
                ((ratio - zoom_ratio).abs() >= zoom::RATIO_EPSILON)
                    .then(|| Self::create_from(range, ratio))
            }
            _ => {
                let next = Self::derive(inputs);
                (next != *self).then_some(next)
            }
        }
    }
}
