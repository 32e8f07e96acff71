// SPDX-License-Identifier: GPL-3.0-only

use super::{
    DerivedUiState, SingleSelectableUiState, StateInputs, all_selectable, check_selection,
    option_values, ordered_options,
};
use crate::constants::{VideoQuality, order};
use serde::Serialize;

pub(crate) const CONCERN: &str = "video quality";

/// Recording quality picker state, highest quality first after Auto
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VideoQualityUiState {
    Unavailable,
    Available {
        selected_video_quality: VideoQuality,
        available_video_qualities: Vec<SingleSelectableUiState<VideoQuality>>,
    },
}

impl VideoQualityUiState {
    #[track_caller]
    pub fn available(
        selected_video_quality: VideoQuality,
        available_video_qualities: Vec<SingleSelectableUiState<VideoQuality>>,
    ) -> Self {
        check_selection(CONCERN, selected_video_quality, &available_video_qualities);
        VideoQualityUiState::Available {
            selected_video_quality,
            available_video_qualities,
        }
    }

    pub fn selected(&self) -> Option<VideoQuality> {
        match self {
            VideoQualityUiState::Unavailable => None,
            VideoQualityUiState::Available {
                selected_video_quality,
                ..
            } => Some(*selected_video_quality),
        }
    }

    pub fn options(&self) -> &[SingleSelectableUiState<VideoQuality>] {
        match self {
            VideoQualityUiState::Unavailable => &[],
            VideoQualityUiState::Available {
                available_video_qualities,
                ..
            } => available_video_qualities,
        }
    }
}

fn video_qualities(inputs: &StateInputs<'_>) -> Vec<VideoQuality> {
    inputs
        .lens_constraints()
        .map(|lens| ordered_options(&order::VIDEO_QUALITIES, &lens.video_qualities()))
        .unwrap_or_default()
}

impl DerivedUiState for VideoQualityUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        let qualities = video_qualities(inputs);
        if qualities.len() < 2 {
            return VideoQualityUiState::Unavailable;
        }
        Self::available(inputs.settings.video_quality, all_selectable(&qualities))
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        match self {
            VideoQualityUiState::Available {
                selected_video_quality,
                available_video_qualities,
            } if option_values(available_video_qualities) == video_qualities(inputs) => {
                let selected = inputs.settings.video_quality;
                (selected != *selected_video_quality)
                    .then(|| Self::available(selected, available_video_qualities.clone()))
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
    use crate::constants::ExternalCaptureMode;

    #[test]
    fn test_highest_quality_first() {
        let system = CameraSystemConstraints::example();
        let camera_state = CameraState::default();
        let settings = CameraAppSettings::default();
        let state = VideoQualityUiState::derive(&StateInputs::new(
            &settings,
            &system,
            &camera_state,
            ExternalCaptureMode::Standard,
        ));
        let values: Vec<_> = state.options().iter().map(|o| o.value()).collect();
        assert_eq!(
            values,
            vec![
                VideoQuality::Unspecified,
                VideoQuality::Uhd,
                VideoQuality::Fhd,
                VideoQuality::Hd,
                VideoQuality::Sd,
            ]
        );
    }

    #[test]
    fn test_unspecified_only_lens_is_unavailable() {
        let mut fixture = TestInputs::new();
        fixture.back_lens().supported_video_qualities = BTreeSet::new();
        assert_eq!(
            VideoQualityUiState::derive(&fixture.inputs()),
            VideoQualityUiState::Unavailable
        );
    }

    #[test]
    fn test_unchanged_inputs_reconcile_to_none() {
        let fixture = TestInputs::new();
        let state = VideoQualityUiState::derive(&fixture.inputs());
        assert!(state.reconcile(&fixture.inputs()).is_none());
    }
}
