// SPDX-License-Identifier: GPL-3.0-only

//! HDR toggle state
//!
//! HDR has a video half (dynamic range) and a photo half (image format).
//! Which halves the toggle drives depends on the capture mode: video-only
//! drives the dynamic range, image-only the image format, standard both.
//! A half is only offered when the lens supports more than its baseline.

use super::{
    DerivedUiState, SingleSelectableUiState, StateInputs, all_selectable, check_selection,
    ordered_options,
};
use crate::constants::{ConcurrentCameraMode, DynamicRange, ImageOutputFormat, order};
use serde::Serialize;

pub(crate) const DYNAMIC_RANGE_CONCERN: &str = "HDR dynamic range";
pub(crate) const IMAGE_FORMAT_CONCERN: &str = "HDR image format";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HdrUiState {
    Unavailable,
    Available {
        selected_dynamic_range: DynamicRange,
        selected_image_format: ImageOutputFormat,
        /// Empty when the video half is not offered
        available_dynamic_ranges: Vec<SingleSelectableUiState<DynamicRange>>,
        /// Empty when the photo half is not offered
        available_image_formats: Vec<SingleSelectableUiState<ImageOutputFormat>>,
    },
}

impl HdrUiState {
    /// Build the available variant, checking each offered half
    #[track_caller]
    pub fn available(
        selected_dynamic_range: DynamicRange,
        selected_image_format: ImageOutputFormat,
        available_dynamic_ranges: Vec<SingleSelectableUiState<DynamicRange>>,
        available_image_formats: Vec<SingleSelectableUiState<ImageOutputFormat>>,
    ) -> Self {
        if !available_dynamic_ranges.is_empty() {
            check_selection(
                DYNAMIC_RANGE_CONCERN,
                selected_dynamic_range,
                &available_dynamic_ranges,
            );
        }
        if !available_image_formats.is_empty() {
            check_selection(
                IMAGE_FORMAT_CONCERN,
                selected_image_format,
                &available_image_formats,
            );
        }
        HdrUiState::Available {
            selected_dynamic_range,
            selected_image_format,
            available_dynamic_ranges,
            available_image_formats,
        }
    }

    /// Whether either offered half is in its HDR setting
    pub fn is_hdr_on(&self) -> bool {
        match self {
            HdrUiState::Unavailable => false,
            HdrUiState::Available {
                selected_dynamic_range,
                selected_image_format,
                available_dynamic_ranges,
                available_image_formats,
            } => {
                (!available_dynamic_ranges.is_empty()
                    && *selected_dynamic_range != DynamicRange::Sdr)
                    || (!available_image_formats.is_empty()
                        && *selected_image_format != ImageOutputFormat::Jpeg)
            }
        }
    }

    /// HDR dynamic range to switch to, when the video half is offered
    pub fn hdr_dynamic_range(&self) -> Option<DynamicRange> {
        match self {
            HdrUiState::Available {
                available_dynamic_ranges,
                ..
            } => available_dynamic_ranges
                .iter()
                .filter(|option| option.is_selectable())
                .map(SingleSelectableUiState::value)
                .find(|range| *range != DynamicRange::Sdr),
            HdrUiState::Unavailable => None,
        }
    }

    /// HDR image format to switch to, when the photo half is offered
    pub fn hdr_image_format(&self) -> Option<ImageOutputFormat> {
        match self {
            HdrUiState::Available {
                available_image_formats,
                ..
            } => available_image_formats
                .iter()
                .filter(|option| option.is_selectable())
                .map(SingleSelectableUiState::value)
                .find(|format| *format != ImageOutputFormat::Jpeg),
            HdrUiState::Unavailable => None,
        }
    }
}

type HdrOptions = (
    Vec<SingleSelectableUiState<DynamicRange>>,
    Vec<SingleSelectableUiState<ImageOutputFormat>>,
);

fn hdr_options(inputs: &StateInputs<'_>) -> Option<HdrOptions> {
    let lens = inputs.lens_constraints()?;
    if inputs.settings.concurrent_camera_mode == ConcurrentCameraMode::Dual {
        return None;
    }
    let capture_mode = inputs.settings.capture_mode;

    let mut ranges = Vec::new();
    if capture_mode.captures_video() {
        let supported = ordered_options(&order::DYNAMIC_RANGES, &lens.dynamic_ranges());
        if supported.len() >= 2 {
            ranges = all_selectable(&supported);
        }
    }

    let mut formats = Vec::new();
    if capture_mode.captures_images() {
        let supported = ordered_options(&order::IMAGE_FORMATS, &lens.image_formats());
        if supported.len() >= 2 {
            formats = all_selectable(&supported);
        }
    }

    if ranges.is_empty() && formats.is_empty() {
        return None;
    }
    Some((ranges, formats))
}

impl DerivedUiState for HdrUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        match hdr_options(inputs) {
            Some((ranges, formats)) => Self::available(
                inputs.settings.dynamic_range,
                inputs.settings.image_format,
                ranges,
                formats,
            ),
            None => HdrUiState::Unavailable,
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let options = hdr_options(inputs);
        match (self, options) {
            (
                HdrUiState::Available {
                    selected_dynamic_range,
                    selected_image_format,
                    available_dynamic_ranges,
                    available_image_formats,
                },
                Some((ranges, formats)),
            ) if *available_dynamic_ranges == ranges && *available_image_formats == formats => {
                let range = inputs.settings.dynamic_range;
                let format = inputs.settings.image_format;
                if range == *selected_dynamic_range && format == *selected_image_format {
                    return None;
                }
                Some(Self::available(range, format, ranges, formats))
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
    use crate::constants::{CaptureMode, ExternalCaptureMode, LensFacing};

    fn derive_with(settings: &CameraAppSettings) -> HdrUiState {
        let system = CameraSystemConstraints::example();
        let camera_state = CameraState::default();
        HdrUiState::derive(&StateInputs::new(
            settings,
            &system,
            &camera_state,
            ExternalCaptureMode::Standard,
        ))
    }

    #[test]
    fn test_capture_mode_picks_halves() {
        let video = derive_with(&CameraAppSettings {
            capture_mode: CaptureMode::VideoOnly,
            ..Default::default()
        });
        assert_eq!(video.hdr_dynamic_range(), Some(DynamicRange::Hlg10));
        assert_eq!(video.hdr_image_format(), None);

        let image = derive_with(&CameraAppSettings {
            capture_mode: CaptureMode::ImageOnly,
            ..Default::default()
        });
        assert_eq!(image.hdr_dynamic_range(), None);
        assert_eq!(image.hdr_image_format(), Some(ImageOutputFormat::JpegUltraHdr));
    }

    #[test]
    fn test_sdr_only_lens_is_unavailable() {
        let state = derive_with(&CameraAppSettings {
            camera_lens_facing: LensFacing::Front,
            ..Default::default()
        });
        assert_eq!(state, HdrUiState::Unavailable);
    }

    #[test]
    fn test_dual_camera_is_unavailable() {
        let state = derive_with(&CameraAppSettings {
            concurrent_camera_mode: ConcurrentCameraMode::Dual,
            ..Default::default()
        });
        assert_eq!(state, HdrUiState::Unavailable);
    }

    #[test]
    fn test_hdr_on() {
        let state = derive_with(&CameraAppSettings {
            dynamic_range: DynamicRange::Hlg10,
            ..Default::default()
        });
        assert!(state.is_hdr_on());
        assert!(!derive_with(&CameraAppSettings::default()).is_hdr_on());
    }
}
