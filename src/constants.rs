// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants
//!
//! The small closed option sets that settings, constraints and UI state are
//! built from, together with the canonical order each one is shown in.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which way the active lens points
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum LensFacing {
    /// Rear (world-facing) camera
    #[default]
    Back,
    /// Front (selfie) camera
    Front,
}

impl LensFacing {
    pub const ALL: [LensFacing; 2] = [LensFacing::Back, LensFacing::Front];

    pub fn display_name(&self) -> &'static str {
        match self {
            LensFacing::Back => "Back",
            LensFacing::Front => "Front",
        }
    }

    /// The lens on the other side of the device
    pub fn flipped(self) -> Self {
        match self {
            LensFacing::Back => LensFacing::Front,
            LensFacing::Front => LensFacing::Back,
        }
    }
}

/// Flash operating mode
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum FlashMode {
    /// Flash never fires
    #[default]
    Off,
    /// Flash fires on every capture
    On,
    /// Camera decides based on scene brightness
    Auto,
    /// Long-exposure low light boost instead of the LED
    LowLightBoost,
}

impl FlashMode {
    pub const ALL: [FlashMode; 4] = [
        FlashMode::Off,
        FlashMode::On,
        FlashMode::Auto,
        FlashMode::LowLightBoost,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FlashMode::Off => "Off",
            FlashMode::On => "On",
            FlashMode::Auto => "Auto",
            FlashMode::LowLightBoost => "Low Light Boost",
        }
    }
}

/// Output aspect ratio
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum AspectRatio {
    /// 9:16 portrait
    #[default]
    NineSixteen,
    /// 3:4 portrait
    ThreeFour,
    /// 1:1 square
    OneOne,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::NineSixteen,
        AspectRatio::ThreeFour,
        AspectRatio::OneOne,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AspectRatio::NineSixteen => "9:16",
            AspectRatio::ThreeFour => "3:4",
            AspectRatio::OneOne => "1:1",
        }
    }

    /// Numerator and denominator of the ratio (width:height)
    pub fn ratio(&self) -> (u32, u32) {
        match self {
            AspectRatio::NineSixteen => (9, 16),
            AspectRatio::ThreeFour => (3, 4),
            AspectRatio::OneOne => (1, 1),
        }
    }
}

/// What the shutter button produces
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum CaptureMode {
    /// Tap for a photo, long press for video
    #[default]
    Standard,
    /// Every press records video
    VideoOnly,
    /// Every press takes a photo
    ImageOnly,
}

impl CaptureMode {
    pub const ALL: [CaptureMode; 3] = [
        CaptureMode::Standard,
        CaptureMode::VideoOnly,
        CaptureMode::ImageOnly,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CaptureMode::Standard => "Standard",
            CaptureMode::VideoOnly => "Video",
            CaptureMode::ImageOnly => "Photo",
        }
    }

    pub fn captures_images(&self) -> bool {
        !matches!(self, CaptureMode::VideoOnly)
    }

    pub fn captures_video(&self) -> bool {
        !matches!(self, CaptureMode::ImageOnly)
    }
}

/// Video dynamic range
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum DynamicRange {
    /// Standard dynamic range
    #[default]
    Sdr,
    /// 10-bit HLG HDR video
    Hlg10,
}

impl DynamicRange {
    pub const ALL: [DynamicRange; 2] = [DynamicRange::Sdr, DynamicRange::Hlg10];

    pub fn display_name(&self) -> &'static str {
        match self {
            DynamicRange::Sdr => "SDR",
            DynamicRange::Hlg10 => "HLG10",
        }
    }
}

/// Still image encoding
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum ImageOutputFormat {
    /// Plain JPEG
    #[default]
    Jpeg,
    /// JPEG with an embedded gain map (Ultra HDR)
    JpegUltraHdr,
}

impl ImageOutputFormat {
    pub const ALL: [ImageOutputFormat; 2] =
        [ImageOutputFormat::Jpeg, ImageOutputFormat::JpegUltraHdr];

    pub fn display_name(&self) -> &'static str {
        match self {
            ImageOutputFormat::Jpeg => "JPEG",
            ImageOutputFormat::JpegUltraHdr => "Ultra HDR",
        }
    }
}

/// Video stabilization
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum StabilizationMode {
    /// No stabilization
    Off,
    /// Camera picks the best mode for the current configuration
    #[default]
    Auto,
    /// Preview and recording stabilization
    On,
    /// Recording-only stabilization with a larger crop
    HighQuality,
    /// Optical stabilization only
    Optical,
}

impl StabilizationMode {
    pub const ALL: [StabilizationMode; 5] = [
        StabilizationMode::Off,
        StabilizationMode::Auto,
        StabilizationMode::On,
        StabilizationMode::HighQuality,
        StabilizationMode::Optical,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            StabilizationMode::Off => "Off",
            StabilizationMode::Auto => "Auto",
            StabilizationMode::On => "On",
            StabilizationMode::HighQuality => "High Quality",
            StabilizationMode::Optical => "Optical",
        }
    }

    /// Whether this mode crops the stream and therefore caps the frame rate
    pub fn limits_frame_rate(&self) -> bool {
        matches!(self, StabilizationMode::On | StabilizationMode::HighQuality)
    }
}

/// Number of streams bound to the camera
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum StreamConfig {
    /// Separate preview, image and video streams
    #[default]
    MultipleStreams,
    /// A single shared stream (effects friendly)
    SingleStream,
}

impl StreamConfig {
    pub const ALL: [StreamConfig; 2] = [StreamConfig::MultipleStreams, StreamConfig::SingleStream];

    pub fn display_name(&self) -> &'static str {
        match self {
            StreamConfig::MultipleStreams => "Multi Stream",
            StreamConfig::SingleStream => "Single Stream",
        }
    }
}

/// Recording resolution class
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum VideoQuality {
    /// Let the camera choose
    #[default]
    Unspecified,
    /// 480p
    Sd,
    /// 720p
    Hd,
    /// 1080p
    Fhd,
    /// 2160p
    Uhd,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 5] = [
        VideoQuality::Unspecified,
        VideoQuality::Sd,
        VideoQuality::Hd,
        VideoQuality::Fhd,
        VideoQuality::Uhd,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            VideoQuality::Unspecified => "Auto",
            VideoQuality::Sd => "SD",
            VideoQuality::Hd => "HD",
            VideoQuality::Fhd => "FHD",
            VideoQuality::Uhd => "UHD",
        }
    }
}

/// Whether both lenses stream at once
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum ConcurrentCameraMode {
    /// Single camera
    #[default]
    Off,
    /// Front and back camera composited (picture in picture)
    Dual,
}

impl ConcurrentCameraMode {
    pub const ALL: [ConcurrentCameraMode; 2] =
        [ConcurrentCameraMode::Off, ConcurrentCameraMode::Dual];

    pub fn display_name(&self) -> &'static str {
        match self {
            ConcurrentCameraMode::Off => "Off",
            ConcurrentCameraMode::Dual => "Dual",
        }
    }
}

/// Application theme preference
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum DarkMode {
    /// Follow the system setting
    #[default]
    System,
    /// Always dark
    Dark,
    /// Always light
    Light,
}

impl DarkMode {
    pub const ALL: [DarkMode; 3] = [DarkMode::System, DarkMode::Dark, DarkMode::Light];

    pub fn display_name(&self) -> &'static str {
        match self {
            DarkMode::System => "System",
            DarkMode::Dark => "Dark",
            DarkMode::Light => "Light",
        }
    }
}

/// How the app was launched
///
/// Another app may ask for a single photo or a single video, which restricts
/// what the capture screen offers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum ExternalCaptureMode {
    /// Normal launch
    #[default]
    Standard,
    /// Launched to return one photo
    ImageCapture,
    /// Launched to return several photos
    MultipleImageCapture,
    /// Launched to return one video
    VideoCapture,
}

impl ExternalCaptureMode {
    /// Capture mode an external request pins the app to, if any
    pub fn forced_capture_mode(&self) -> Option<CaptureMode> {
        match self {
            ExternalCaptureMode::Standard => None,
            ExternalCaptureMode::ImageCapture | ExternalCaptureMode::MultipleImageCapture => {
                Some(CaptureMode::ImageOnly)
            }
            ExternalCaptureMode::VideoCapture => Some(CaptureMode::VideoOnly),
        }
    }
}

/// Canonical UI orderings
///
/// Supported values are projected onto these lists; anything missing from a
/// list never reaches the UI.
pub mod order {
    use super::*;

    pub const FLASH_MODES: [FlashMode; 4] = [
        FlashMode::Off,
        FlashMode::On,
        FlashMode::Auto,
        FlashMode::LowLightBoost,
    ];

    pub const ASPECT_RATIOS: [AspectRatio; 3] = [
        AspectRatio::NineSixteen,
        AspectRatio::ThreeFour,
        AspectRatio::OneOne,
    ];

    pub const CAPTURE_MODES: [CaptureMode; 3] = [
        CaptureMode::Standard,
        CaptureMode::VideoOnly,
        CaptureMode::ImageOnly,
    ];

    pub const DYNAMIC_RANGES: [DynamicRange; 2] = [DynamicRange::Sdr, DynamicRange::Hlg10];

    pub const IMAGE_FORMATS: [ImageOutputFormat; 2] =
        [ImageOutputFormat::Jpeg, ImageOutputFormat::JpegUltraHdr];

    pub const STABILIZATION_MODES: [StabilizationMode; 5] = [
        StabilizationMode::Off,
        StabilizationMode::Auto,
        StabilizationMode::On,
        StabilizationMode::HighQuality,
        StabilizationMode::Optical,
    ];

    pub const STREAM_CONFIGS: [StreamConfig; 2] =
        [StreamConfig::MultipleStreams, StreamConfig::SingleStream];

    pub const VIDEO_QUALITIES: [VideoQuality; 5] = [
        VideoQuality::Unspecified,
        VideoQuality::Uhd,
        VideoQuality::Fhd,
        VideoQuality::Hd,
        VideoQuality::Sd,
    ];

    pub const LENS_FACINGS: [LensFacing; 2] = [LensFacing::Front, LensFacing::Back];

    pub const CONCURRENT_CAMERA_MODES: [ConcurrentCameraMode; 2] =
        [ConcurrentCameraMode::Off, ConcurrentCameraMode::Dual];

    /// Target frame rates; 0 lets the camera choose
    pub const FRAME_RATES: [u32; 4] = [FRAME_RATE_AUTO, 15, 30, 60];
}

/// Frame rate value meaning "camera chooses"
pub const FRAME_RATE_AUTO: u32 = 0;

/// Highest frame rate the cropping stabilization modes can sustain
pub const STABILIZATION_MAX_FRAME_RATE: u32 = 30;

/// Zoom constants
pub mod zoom {
    /// Ratio used when neither the camera nor the settings know better
    pub const DEFAULT_RATIO: f32 = 1.0;

    /// Quick-select zoom buttons, in display order
    pub const QUICK_LEVELS: [f32; 4] = [0.5, 1.0, 2.0, 5.0];

    /// Tolerance when comparing zoom ratios reported by the camera
    pub const RATIO_EPSILON: f32 = 0.001;
}

/// Format a recording duration as `MM:SS` (or `H:MM:SS` past an hour)
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let total_secs = elapsed_ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(5_999), "00:05");
        assert_eq!(format_elapsed(65_000), "01:05");
        assert_eq!(format_elapsed(3_723_000), "1:02:03");
    }

    #[test]
    fn test_lens_flip() {
        assert_eq!(LensFacing::Back.flipped(), LensFacing::Front);
        assert_eq!(LensFacing::Front.flipped().flipped(), LensFacing::Front);
    }

    #[test]
    fn test_external_mode_forces_capture_mode() {
        assert_eq!(ExternalCaptureMode::Standard.forced_capture_mode(), None);
        assert_eq!(
            ExternalCaptureMode::MultipleImageCapture.forced_capture_mode(),
            Some(CaptureMode::ImageOnly)
        );
        assert_eq!(
            ExternalCaptureMode::VideoCapture.forced_capture_mode(),
            Some(CaptureMode::VideoOnly)
        );
    }
}
