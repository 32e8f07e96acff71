// SPDX-License-Identifier: GPL-3.0-only

//! Capture UI state derivation
//!
//! Every control on the capture screen is described by an immutable state
//! value computed from three inputs: the user's settings, the constraints of
//! the active lens, and the live camera state. Each concern lives in its own
//! module and follows the same contract:
//!
//! - supported values are projected onto a fixed canonical order
//! - fewer than two options means the control is `Unavailable`
//! - when `Available`, the selected value is one of its selectable options,
//!   otherwise the reconciler panics (see [`check_selection`])
//! - reconciliation against new inputs returns `None` when nothing relevant
//!   changed, so the previous instance is kept
//!
//! [`capture::CaptureUiState`] bundles all concerns behind `Arc`s so
//! unchanged concerns keep their identity across updates.

pub mod aspect_ratio;
pub mod audio;
pub mod capture;
pub mod capture_button;
pub mod capture_mode;
pub mod concurrent_camera;
pub mod elapsed_time;
pub mod flash;
pub mod flip_lens;
pub mod frame_rate;
pub mod hdr;
pub mod stabilization;
pub mod stream_config;
pub mod video_quality;
pub mod zoom;

pub use aspect_ratio::AspectRatioUiState;
pub use audio::AudioUiState;
pub use capture::{CaptureUiState, ReadyCaptureUiState};
pub use capture_button::CaptureButtonUiState;
pub use capture_mode::CaptureModeUiState;
pub use concurrent_camera::ConcurrentCameraUiState;
pub use elapsed_time::ElapsedTimeUiState;
pub use flash::FlashModeUiState;
pub use flip_lens::FlipLensUiState;
pub use frame_rate::FrameRateUiState;
pub use hdr::HdrUiState;
pub use stabilization::StabilizationUiState;
pub use stream_config::StreamConfigUiState;
pub use video_quality::VideoQualityUiState;
pub use zoom::ZoomUiState;

use crate::camera::{CameraConstraints, CameraState, CameraSystemConstraints};
use crate::config::CameraAppSettings;
use crate::constants::ExternalCaptureMode;
use crate::errors::UiStateError;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::sync::Arc;

/// Why an option is shown but cannot be picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisabledReason {
    /// Launched by another app for a photo
    VideoCaptureExternalUnsupported,
    /// Launched by another app for a video
    ImageCaptureExternalUnsupported,
    /// Launched by another app, standard mode makes no sense
    StandardCaptureExternalUnsupported,
    /// Dual camera cannot take still images
    ImageCaptureUnsupportedConcurrentCamera,
    /// Dual camera cannot run with HDR
    HdrUnsupportedConcurrentCamera,
    /// Dual camera cannot run in photo-only mode
    ConcurrentCameraUnsupportedImageOnly,
    /// Dual camera cannot serve an external capture request
    ConcurrentCameraUnsupportedExternal,
    /// Cropping stabilization cannot sustain the locked frame rate
    StabilizationUnsupportedAtFrameRate,
    /// The frame rate is too high for the selected stabilization
    FrameRateUnsupportedWithStabilization,
}

impl DisabledReason {
    /// User-facing explanation
    pub fn message(&self) -> &'static str {
        match self {
            DisabledReason::VideoCaptureExternalUnsupported => {
                "Video capture is not available when taking a photo for another app"
            }
            DisabledReason::ImageCaptureExternalUnsupported => {
                "Photo capture is not available when recording for another app"
            }
            DisabledReason::StandardCaptureExternalUnsupported => {
                "Standard mode is not available when capturing for another app"
            }
            DisabledReason::ImageCaptureUnsupportedConcurrentCamera => {
                "Photos are not supported with dual camera"
            }
            DisabledReason::HdrUnsupportedConcurrentCamera => {
                "Dual camera is not supported with HDR"
            }
            DisabledReason::ConcurrentCameraUnsupportedImageOnly => {
                "Dual camera is not supported in photo mode"
            }
            DisabledReason::ConcurrentCameraUnsupportedExternal => {
                "Dual camera is not available when capturing for another app"
            }
            DisabledReason::StabilizationUnsupportedAtFrameRate => {
                "This stabilization mode is not supported above 30 fps"
            }
            DisabledReason::FrameRateUnsupportedWithStabilization => {
                "This frame rate is not supported with the selected stabilization"
            }
        }
    }
}

/// One entry of an option list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SingleSelectableUiState<T> {
    /// Can be picked
    Selectable { value: T },
    /// Shown greyed out
    Disabled { value: T, reason: DisabledReason },
}

impl<T: Copy> SingleSelectableUiState<T> {
    pub fn selectable(value: T) -> Self {
        SingleSelectableUiState::Selectable { value }
    }

    pub fn disabled(value: T, reason: DisabledReason) -> Self {
        SingleSelectableUiState::Disabled { value, reason }
    }

    pub fn value(&self) -> T {
        match self {
            SingleSelectableUiState::Selectable { value }
            | SingleSelectableUiState::Disabled { value, .. } => *value,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, SingleSelectableUiState::Selectable { .. })
    }

    pub fn disabled_reason(&self) -> Option<DisabledReason> {
        match self {
            SingleSelectableUiState::Selectable { .. } => None,
            SingleSelectableUiState::Disabled { reason, .. } => Some(*reason),
        }
    }
}

/// Everything a reconciler may look at
#[derive(Debug, Clone, Copy)]
pub struct StateInputs<'a> {
    pub settings: &'a CameraAppSettings,
    pub system_constraints: &'a CameraSystemConstraints,
    pub camera_state: &'a CameraState,
    pub external_capture_mode: ExternalCaptureMode,
}

impl<'a> StateInputs<'a> {
    pub fn new(
        settings: &'a CameraAppSettings,
        system_constraints: &'a CameraSystemConstraints,
        camera_state: &'a CameraState,
        external_capture_mode: ExternalCaptureMode,
    ) -> Self {
        Self {
            settings,
            system_constraints,
            camera_state,
            external_capture_mode,
        }
    }

    /// Constraints of the lens the settings point at
    pub fn lens_constraints(&self) -> Option<&'a CameraConstraints> {
        self.system_constraints
            .for_lens(self.settings.camera_lens_facing)
    }
}

/// A UI state derived from [`StateInputs`]
pub trait DerivedUiState: Sized {
    /// Build the state from scratch
    fn derive(inputs: &StateInputs<'_>) -> Self;

    /// Re-derive against new inputs
    ///
    /// Returns `None` when nothing this concern depends on changed, meaning
    /// the caller keeps the current instance.
    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self>;
}

/// Reconcile a shared state, handing back the same `Arc` when unchanged
pub fn reconcile_shared<T: DerivedUiState>(current: &Arc<T>, inputs: &StateInputs<'_>) -> Arc<T> {
    match current.reconcile(inputs) {
        Some(next) => Arc::new(next),
        None => Arc::clone(current),
    }
}

/// Filter `canonical` down to `supported`, keeping canonical order
///
/// Supported values missing from the canonical list are dropped.
pub fn ordered_options<T: Ord + Copy>(canonical: &[T], supported: &BTreeSet<T>) -> Vec<T> {
    canonical
        .iter()
        .filter(|value| supported.contains(*value))
        .copied()
        .collect()
}

/// Wrap every value as selectable
pub fn all_selectable<T: Copy>(values: &[T]) -> Vec<SingleSelectableUiState<T>> {
    values
        .iter()
        .map(|value| SingleSelectableUiState::selectable(*value))
        .collect()
}

/// The raw values of an option list, disabled ones included
pub fn option_values<T: Copy>(options: &[SingleSelectableUiState<T>]) -> Vec<T> {
    options.iter().map(SingleSelectableUiState::value).collect()
}

/// Whether `value` is offered and can be picked
pub fn is_selectable<T: Copy + PartialEq>(options: &[SingleSelectableUiState<T>], value: T) -> bool {
    options
        .iter()
        .any(|option| option.is_selectable() && option.value() == value)
}

/// Verify that `selected` is a selectable member of `options`
pub fn validate_selection<T: Copy + PartialEq + Debug>(
    concern: &'static str,
    selected: T,
    options: &[SingleSelectableUiState<T>],
) -> Result<(), UiStateError> {
    if is_selectable(options, selected) {
        return Ok(());
    }
    let options = options
        .iter()
        .filter(|option| option.is_selectable())
        .map(|option| format!("{:?}", option.value()))
        .collect::<Vec<_>>()
        .join(", ");
    Err(UiStateError::SelectionUnavailable {
        concern,
        selected: format!("{:?}", selected),
        options,
    })
}

/// Fail fast when an available concern's selection is not selectable
///
/// A mismatch means settings and constraints drifted apart upstream.
/// Substituting another value here would hide that, so it is fatal.
#[track_caller]
pub fn check_selection<T: Copy + PartialEq + Debug>(
    concern: &'static str,
    selected: T,
    options: &[SingleSelectableUiState<T>],
) {
    if let Err(err) = validate_selection(concern, selected, options) {
        panic!("UI state invariant violated: {err}");
    }
}

/// Owned inputs for unit tests of a single concern
#[cfg(test)]
pub(crate) struct TestInputs {
    pub settings: CameraAppSettings,
    pub system: CameraSystemConstraints,
    pub camera_state: CameraState,
}

#[cfg(test)]
impl TestInputs {
    /// Default settings on the example device
    pub fn new() -> Self {
        Self {
            settings: CameraAppSettings::default(),
            system: CameraSystemConstraints::example(),
            camera_state: CameraState::default(),
        }
    }

    pub fn inputs(&self) -> StateInputs<'_> {
        StateInputs::new(
            &self.settings,
            &self.system,
            &self.camera_state,
            ExternalCaptureMode::Standard,
        )
    }

    pub fn back_lens(&mut self) -> &mut CameraConstraints {
        self.system
            .per_lens_constraints
            .entry(crate::constants::LensFacing::Back)
            .or_default()
    }
}
