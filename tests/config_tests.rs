// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use camera_ui_state::CameraAppSettings;
use camera_ui_state::camera::CameraSystemConstraints;
use camera_ui_state::constants::{
    CaptureMode, ConcurrentCameraMode, DynamicRange, ExternalCaptureMode, FRAME_RATE_AUTO,
    FlashMode, ImageOutputFormat, LensFacing, StabilizationMode,
};
use camera_ui_state::storage::{JsonSettingsStore, SettingsRepository};
use std::collections::BTreeMap;

#[test]
fn test_config_default() {
    // Test that default settings match a fresh install
    let settings = CameraAppSettings::default();

    assert_eq!(settings.camera_lens_facing, LensFacing::Back);
    assert_eq!(settings.flash_mode, FlashMode::Off);
    assert_eq!(settings.capture_mode, CaptureMode::Standard);
    assert_eq!(settings.target_frame_rate, FRAME_RATE_AUTO);
    assert!(
        settings.audio_enabled,
        "Audio should be recorded by default"
    );
    assert!(!settings.is_hdr_enabled());
}

#[test]
fn test_defaults_fit_example_device() {
    // Defaults should need no adjustment on a fully featured device
    let system = CameraSystemConstraints::example();
    let settings = CameraAppSettings::default();
    assert_eq!(
        settings.constrained_to(&system, ExternalCaptureMode::Standard),
        settings
    );
}

#[test]
fn test_unlisted_frame_rate_becomes_auto() {
    let mut system = CameraSystemConstraints::example();
    if let Some(back) = system.per_lens_constraints.get_mut(&LensFacing::Back) {
        back.supported_fixed_frame_rates.insert(24);
    }
    let settings = CameraAppSettings {
        target_frame_rate: 24,
        ..Default::default()
    };

    let constrained = settings.constrained_to(&system, ExternalCaptureMode::Standard);
    assert_eq!(constrained.target_frame_rate, FRAME_RATE_AUTO);
}

#[test]
fn test_hdr_and_dual_camera_resolve_towards_hdr() {
    let system = CameraSystemConstraints::example();
    let settings = CameraAppSettings {
        dynamic_range: DynamicRange::Hlg10,
        concurrent_camera_mode: ConcurrentCameraMode::Dual,
        ..Default::default()
    };

    let constrained = settings.constrained_to(&system, ExternalCaptureMode::Standard);
    assert_eq!(constrained.dynamic_range, DynamicRange::Hlg10);
    assert_eq!(constrained.concurrent_camera_mode, ConcurrentCameraMode::Off);
}

#[test]
fn test_video_only_drops_photo_hdr() {
    let system = CameraSystemConstraints::example();
    let settings = CameraAppSettings {
        capture_mode: CaptureMode::VideoOnly,
        image_format: ImageOutputFormat::JpegUltraHdr,
        ..Default::default()
    };

    let constrained = settings.constrained_to(&system, ExternalCaptureMode::Standard);
    assert_eq!(constrained.image_format, ImageOutputFormat::Jpeg);
}

#[test]
fn test_default_zoom_clamped_to_lens() {
    let system = CameraSystemConstraints::example();
    let settings = CameraAppSettings {
        default_zoom_ratios: BTreeMap::from([(LensFacing::Back, 0.1)]),
        ..Default::default()
    };

    let constrained = settings.constrained_to(&system, ExternalCaptureMode::Standard);
    assert_eq!(constrained.default_zoom_ratios[&LensFacing::Back], 0.6);
}

#[test]
fn test_settings_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSettingsStore::new(dir.path().join("settings.json"));
    let settings = CameraAppSettings {
        camera_lens_facing: LensFacing::Front,
        stabilization_mode: StabilizationMode::Off,
        max_video_duration_ms: Some(30_000),
        default_zoom_ratios: BTreeMap::from([(LensFacing::Front, 2.0)]),
        ..Default::default()
    };

    store.save(&settings).unwrap();
    assert_eq!(store.load().unwrap(), settings);
}
