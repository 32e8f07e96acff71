// SPDX-License-Identifier: GPL-3.0-only

//! Capability constraints reported by the camera system
//!
//! Each lens advertises the option values it can honour. A handful of
//! baseline values (flash off, SDR, plain JPEG, ...) need no hardware support
//! and are always reported as supported by the accessors below, whatever the
//! raw sets contain.

use crate::constants::{
    ConcurrentCameraMode, DynamicRange, FRAME_RATE_AUTO, FlashMode, ImageOutputFormat,
    LensFacing, StabilizationMode, StreamConfig, VideoQuality,
};
use crate::errors::UiStateError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Continuous zoom range of a lens
///
/// Deserialization goes through [`ZoomRange::new`], so a range read from
/// JSON is never inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawZoomRange")]
pub struct ZoomRange {
    pub min: f32,
    pub max: f32,
}

/// Unchecked wire form of [`ZoomRange`]
#[derive(Deserialize)]
struct RawZoomRange {
    min: f32,
    max: f32,
}

impl TryFrom<RawZoomRange> for ZoomRange {
    type Error = UiStateError;

    fn try_from(raw: RawZoomRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl ZoomRange {
    /// Create a range, rejecting inverted or non-finite bounds
    pub fn new(min: f32, max: f32) -> Result<Self, UiStateError> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(UiStateError::InvalidRange {
                concern: "zoom",
                min,
                max,
            });
        }
        Ok(Self { min, max })
    }

    /// A range with a single ratio offers nothing to zoom through
    pub fn is_degenerate(&self) -> bool {
        self.max - self.min < crate::constants::zoom::RATIO_EPSILON
    }

    pub fn contains(&self, ratio: f32) -> bool {
        ratio >= self.min && ratio <= self.max
    }

    pub fn clamp(&self, ratio: f32) -> f32 {
        ratio.min(self.max).max(self.min)
    }

    /// Position of `ratio` inside the range, 0.0 at min and 1.0 at max
    pub fn linear_position(&self, ratio: f32) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }
        (self.clamp(ratio) - self.min) / (self.max - self.min)
    }
}

/// Option values one lens supports
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConstraints {
    pub supported_flash_modes: BTreeSet<FlashMode>,
    pub supported_stabilization_modes: BTreeSet<StabilizationMode>,
    /// Fixed frame rates the lens can be locked to
    pub supported_fixed_frame_rates: BTreeSet<u32>,
    pub supported_dynamic_ranges: BTreeSet<DynamicRange>,
    pub supported_image_formats: BTreeSet<ImageOutputFormat>,
    pub supported_video_qualities: BTreeSet<VideoQuality>,
    pub supported_stream_configs: BTreeSet<StreamConfig>,
    pub supported_zoom_range: Option<ZoomRange>,
}

impl CameraConstraints {
    pub fn flash_modes(&self) -> BTreeSet<FlashMode> {
        with_baseline(&self.supported_flash_modes, FlashMode::Off)
    }

    pub fn stabilization_modes(&self) -> BTreeSet<StabilizationMode> {
        with_baseline(
            &self.supported_stabilization_modes,
            StabilizationMode::Off,
        )
    }

    pub fn frame_rates(&self) -> BTreeSet<u32> {
        with_baseline(&self.supported_fixed_frame_rates, FRAME_RATE_AUTO)
    }

    pub fn dynamic_ranges(&self) -> BTreeSet<DynamicRange> {
        with_baseline(&self.supported_dynamic_ranges, DynamicRange::Sdr)
    }

    pub fn image_formats(&self) -> BTreeSet<ImageOutputFormat> {
        with_baseline(&self.supported_image_formats, ImageOutputFormat::Jpeg)
    }

    pub fn video_qualities(&self) -> BTreeSet<VideoQuality> {
        with_baseline(&self.supported_video_qualities, VideoQuality::Unspecified)
    }

    /// Multi-stream is the default binding and needs no extra support
    pub fn stream_configs(&self) -> BTreeSet<StreamConfig> {
        with_baseline(&self.supported_stream_configs, StreamConfig::MultipleStreams)
    }
}

fn with_baseline<T: Ord + Copy>(supported: &BTreeSet<T>, baseline: T) -> BTreeSet<T> {
    let mut set = supported.clone();
    set.insert(baseline);
    set
}

/// Constraints of the whole camera system
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSystemConstraints {
    /// Lenses present on the device, in discovery order
    pub available_lenses: Vec<LensFacing>,
    /// Whether front and back can stream at the same time
    pub concurrent_cameras_supported: bool,
    pub per_lens_constraints: BTreeMap<LensFacing, CameraConstraints>,
}

impl CameraSystemConstraints {
    pub fn for_lens(&self, lens: LensFacing) -> Option<&CameraConstraints> {
        self.per_lens_constraints.get(&lens)
    }

    pub fn has_lens(&self, lens: LensFacing) -> bool {
        self.available_lenses.contains(&lens)
    }

    pub fn concurrent_camera_modes(&self) -> BTreeSet<ConcurrentCameraMode> {
        let mut modes = BTreeSet::from([ConcurrentCameraMode::Off]);
        let distinct: BTreeSet<LensFacing> = self.available_lenses.iter().copied().collect();
        if self.concurrent_cameras_supported && distinct.len() > 1 {
            modes.insert(ConcurrentCameraMode::Dual);
        }
        modes
    }

    /// A typical two-lens phone, used by the CLI template and tests
    pub fn example() -> Self {
        let back = CameraConstraints {
            supported_flash_modes: BTreeSet::from([
                FlashMode::Off,
                FlashMode::On,
                FlashMode::Auto,
                FlashMode::LowLightBoost,
            ]),
            supported_stabilization_modes: BTreeSet::from([
                StabilizationMode::Off,
                StabilizationMode::Auto,
                StabilizationMode::On,
                StabilizationMode::HighQuality,
            ]),
            supported_fixed_frame_rates: BTreeSet::from([15, 30, 60]),
            supported_dynamic_ranges: BTreeSet::from([DynamicRange::Sdr, DynamicRange::Hlg10]),
            supported_image_formats: BTreeSet::from([
                ImageOutputFormat::Jpeg,
                ImageOutputFormat::JpegUltraHdr,
            ]),
            supported_video_qualities: BTreeSet::from([
                VideoQuality::Sd,
                VideoQuality::Hd,
                VideoQuality::Fhd,
                VideoQuality::Uhd,
            ]),
            supported_stream_configs: BTreeSet::from([
                StreamConfig::MultipleStreams,
                StreamConfig::SingleStream,
            ]),
            supported_zoom_range: Some(ZoomRange { min: 0.6, max: 10.0 }),
        };
        let front = CameraConstraints {
            supported_flash_modes: BTreeSet::from([FlashMode::Off, FlashMode::On]),
            supported_stabilization_modes: BTreeSet::from([
                StabilizationMode::Off,
                StabilizationMode::Auto,
            ]),
            supported_fixed_frame_rates: BTreeSet::from([15, 30]),
            supported_dynamic_ranges: BTreeSet::from([DynamicRange::Sdr]),
            supported_image_formats: BTreeSet::from([ImageOutputFormat::Jpeg]),
            supported_video_qualities: BTreeSet::from([VideoQuality::Hd, VideoQuality::Fhd]),
            supported_stream_configs: BTreeSet::from([
                StreamConfig::MultipleStreams,
                StreamConfig::SingleStream,
            ]),
            supported_zoom_range: Some(ZoomRange { min: 1.0, max: 4.0 }),
        };
        Self {
            available_lenses: vec![LensFacing::Back, LensFacing::Front],
            concurrent_cameras_supported: true,
            per_lens_constraints: BTreeMap::from([
                (LensFacing::Back, back),
                (LensFacing::Front, front),
            ]),
        }
    }
}
