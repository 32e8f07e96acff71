// SPDX-License-Identifier: MPL-2.0

//! Integration tests for capture UI state derivation and reconciliation

use camera_ui_state::CameraAppSettings;
use camera_ui_state::camera::{
    CameraConstraints, CameraState, CameraSystemConstraints, LowLightBoostState,
    VideoRecordingState,
};
use camera_ui_state::constants::{
    CaptureMode, ConcurrentCameraMode, ExternalCaptureMode, FlashMode, LensFacing,
    StabilizationMode,
};
use camera_ui_state::ui_state::{
    CaptureUiState, DerivedUiState, DisabledReason, FlashModeUiState, HdrUiState,
    ReadyCaptureUiState, StateInputs, ZoomUiState, reconcile_shared,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Owned inputs that can be tweaked between derivations
struct Fixture {
    settings: CameraAppSettings,
    constraints: CameraSystemConstraints,
    camera_state: CameraState,
    external: ExternalCaptureMode,
}

impl Fixture {
    fn new() -> Self {
        let constraints = CameraSystemConstraints::example();
        Self {
            settings: CameraAppSettings::default()
                .constrained_to(&constraints, ExternalCaptureMode::Standard),
            constraints,
            camera_state: CameraState {
                is_camera_running: true,
                ..Default::default()
            },
            external: ExternalCaptureMode::Standard,
        }
    }

    fn inputs(&self) -> StateInputs<'_> {
        StateInputs::new(
            &self.settings,
            &self.constraints,
            &self.camera_state,
            self.external,
        )
    }

    fn derive(&self) -> Arc<CaptureUiState> {
        Arc::new(CaptureUiState::derive(&self.inputs()))
    }

    fn back_lens(&mut self) -> &mut CameraConstraints {
        self.constraints
            .per_lens_constraints
            .get_mut(&LensFacing::Back)
            .expect("example constraints have a back lens")
    }
}

fn ready(state: &CaptureUiState) -> &ReadyCaptureUiState {
    state.ready().expect("capture UI state should be ready")
}

fn flash_modes(values: &[FlashMode]) -> BTreeSet<FlashMode> {
    values.iter().copied().collect()
}

#[test]
fn test_unchanged_inputs_keep_identity() {
    let fixture = Fixture::new();
    let state = fixture.derive();

    assert!(state.reconcile(&fixture.inputs()).is_none());
    let next = reconcile_shared(&state, &fixture.inputs());
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn test_boost_change_only_touches_flash() {
    let mut fixture = Fixture::new();
    fixture.settings.flash_mode = FlashMode::LowLightBoost;
    let state = fixture.derive();

    fixture.camera_state.low_light_boost_state = LowLightBoostState::Active { strength: 0.7 };
    let next = reconcile_shared(&state, &fixture.inputs());

    assert!(!Arc::ptr_eq(&state, &next));
    let (before, after) = (ready(&state), ready(&next));
    assert!(!Arc::ptr_eq(&before.flash_mode, &after.flash_mode));
    assert!(after.flash_mode.is_low_light_boost_active());
    assert_eq!(after.flash_mode.selected(), Some(FlashMode::LowLightBoost));
    assert_eq!(after.flash_mode.options(), before.flash_mode.options());

    assert!(Arc::ptr_eq(&before.aspect_ratio, &after.aspect_ratio));
    assert!(Arc::ptr_eq(&before.hdr, &after.hdr));
    assert!(Arc::ptr_eq(&before.zoom, &after.zoom));
    assert!(Arc::ptr_eq(&before.capture_button, &after.capture_button));
}

#[test]
fn test_single_flash_mode_is_unavailable() {
    let state = FlashModeUiState::create_from(
        FlashMode::Off,
        &flash_modes(&[FlashMode::Off]),
        LowLightBoostState::Inactive,
    );
    assert_eq!(state, FlashModeUiState::Unavailable);
}

#[test]
fn test_flash_options_in_canonical_order() {
    let state = FlashModeUiState::create_from(
        FlashMode::Auto,
        &flash_modes(&[FlashMode::Auto, FlashMode::Off, FlashMode::On]),
        LowLightBoostState::Inactive,
    );
    let values: Vec<FlashMode> = state.options().iter().map(|o| o.value()).collect();
    assert_eq!(values, vec![FlashMode::Off, FlashMode::On, FlashMode::Auto]);
    assert!(state.options().iter().all(|o| o.is_selectable()));
    assert_eq!(state.selected(), Some(FlashMode::Auto));
}

#[test]
#[should_panic(expected = "UI state invariant violated")]
fn test_selection_missing_from_options_panics() {
    let mut fixture = Fixture::new();
    fixture.back_lens().supported_flash_modes = flash_modes(&[FlashMode::Off, FlashMode::Auto]);
    // Bypass normalisation so the broken selection reaches the reconciler
    fixture.settings.flash_mode = FlashMode::On;
    fixture.derive();
}

#[test]
fn test_missing_lens_constraints_is_not_ready() {
    let mut fixture = Fixture::new();
    fixture.constraints.per_lens_constraints.remove(&LensFacing::Back);
    assert_eq!(*fixture.derive(), CaptureUiState::NotReady);
}

#[test]
fn test_constraints_arriving_makes_state_ready() {
    let mut fixture = Fixture::new();
    let saved = fixture.constraints.clone();
    fixture.constraints = CameraSystemConstraints::default();
    let state = fixture.derive();
    assert_eq!(*state, CaptureUiState::NotReady);

    fixture.constraints = saved;
    let next = reconcile_shared(&state, &fixture.inputs());
    assert!(next.ready().is_some());
}

#[test]
fn test_dual_camera_greys_out_image_only_and_hides_hdr() {
    let mut fixture = Fixture::new();
    fixture.settings.concurrent_camera_mode = ConcurrentCameraMode::Dual;
    let state = fixture.derive();
    let ready = ready(&state);

    let image_only = ready
        .capture_mode
        .options()
        .iter()
        .find(|o| o.value() == CaptureMode::ImageOnly)
        .copied()
        .expect("image only is always listed");
    assert_eq!(
        image_only.disabled_reason(),
        Some(DisabledReason::ImageCaptureUnsupportedConcurrentCamera)
    );
    assert_eq!(*ready.hdr, HdrUiState::Unavailable);
}

#[test]
fn test_high_frame_rate_disables_cropping_stabilization() {
    let mut fixture = Fixture::new();
    fixture.settings.stabilization_mode = StabilizationMode::Off;
    fixture.settings.target_frame_rate = 60;
    let state = fixture.derive();

    for option in ready(&state).stabilization.options() {
        let expected = option
            .value()
            .limits_frame_rate()
            .then_some(DisabledReason::StabilizationUnsupportedAtFrameRate);
        assert_eq!(option.disabled_reason(), expected, "{:?}", option.value());
    }
}

#[test]
fn test_cropping_stabilization_disables_high_frame_rate() {
    let mut fixture = Fixture::new();
    fixture.settings.stabilization_mode = StabilizationMode::On;
    let state = fixture.derive();

    let options = ready(&state).frame_rate.options();
    let sixty = options
        .iter()
        .find(|o| o.value() == 60)
        .expect("back lens supports 60 fps");
    assert_eq!(
        sixty.disabled_reason(),
        Some(DisabledReason::FrameRateUnsupportedWithStabilization)
    );
    assert!(options.iter().filter(|o| o.value() <= 30).all(|o| o.is_selectable()));
}

#[test]
fn test_zoom_ratio_is_clamped_to_lens_range() {
    let mut fixture = Fixture::new();
    fixture.camera_state.zoom_ratios.insert(LensFacing::Back, 25.0);
    let state = fixture.derive();

    match &*ready(&state).zoom {
        ZoomUiState::Enabled {
            zoom_ratio,
            linear_zoom,
            ..
        } => {
            assert_eq!(*zoom_ratio, 10.0);
            assert_eq!(*linear_zoom, 1.0);
        }
        other => panic!("expected enabled zoom, got {:?}", other),
    }
}

#[test]
fn test_recording_tick_keeps_unrelated_concerns() {
    let mut fixture = Fixture::new();
    fixture.camera_state.video_recording_state = VideoRecordingState::Active {
        elapsed_ms: 1_000,
        audio_amplitude: 0.2,
        paused: false,
    };
    let state = fixture.derive();

    fixture.camera_state.video_recording_state = VideoRecordingState::Active {
        elapsed_ms: 2_000,
        audio_amplitude: 0.2,
        paused: false,
    };
    let next = reconcile_shared(&state, &fixture.inputs());
    let (before, after) = (ready(&state), ready(&next));

    assert!(!Arc::ptr_eq(&before.elapsed_time, &after.elapsed_time));
    assert_eq!(after.elapsed_time.display().as_deref(), Some("00:02"));
    assert!(Arc::ptr_eq(&before.capture_button, &after.capture_button));
    assert!(Arc::ptr_eq(&before.audio, &after.audio));
    assert!(Arc::ptr_eq(&before.flash_mode, &after.flash_mode));
}

#[test]
fn test_external_video_request_pins_capture_mode() {
    let mut fixture = Fixture::new();
    fixture.external = ExternalCaptureMode::VideoCapture;
    fixture.settings = fixture
        .settings
        .constrained_to(&fixture.constraints, fixture.external);
    let state = fixture.derive();
    let ready = ready(&state);

    assert_eq!(ready.capture_mode.selected(), Some(CaptureMode::VideoOnly));
    let selectable: Vec<CaptureMode> = ready
        .capture_mode
        .options()
        .iter()
        .filter(|o| o.is_selectable())
        .map(|o| o.value())
        .collect();
    assert_eq!(selectable, vec![CaptureMode::VideoOnly]);
}

#[test]
#[should_panic(expected = "flash mode")]
fn test_shrinking_constraints_without_settings_sync_panics() {
    let mut fixture = Fixture::new();
    fixture.back_lens().supported_flash_modes = flash_modes(&[FlashMode::Off, FlashMode::On]);
    fixture.settings.flash_mode = FlashMode::On;
    let state = fixture.derive();

    fixture.back_lens().supported_flash_modes = flash_modes(&[FlashMode::Off, FlashMode::Auto]);
    reconcile_shared(&state, &fixture.inputs());
}
