// SPDX-License-Identifier: GPL-3.0-only

//! Whole capture screen state
//!
//! Bundles every concern behind an `Arc`. Reconciling the bundle reconciles
//! each concern independently; a concern that did not change keeps its
//! `Arc`, and when no concern changed the bundle itself is kept.

use super::{
    AspectRatioUiState, AudioUiState, CaptureButtonUiState, CaptureModeUiState,
    ConcurrentCameraUiState, DerivedUiState, ElapsedTimeUiState, FlashModeUiState,
    FlipLensUiState, FrameRateUiState, HdrUiState, StabilizationUiState, StateInputs,
    StreamConfigUiState, VideoQualityUiState, ZoomUiState, reconcile_shared,
};
use crate::constants::ExternalCaptureMode;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaptureUiState {
    /// Constraints for the active lens have not arrived yet
    NotReady,
    Ready(ReadyCaptureUiState),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadyCaptureUiState {
    pub external_capture_mode: ExternalCaptureMode,
    pub flash_mode: Arc<FlashModeUiState>,
    pub aspect_ratio: Arc<AspectRatioUiState>,
    pub capture_mode: Arc<CaptureModeUiState>,
    pub concurrent_camera: Arc<ConcurrentCameraUiState>,
    pub hdr: Arc<HdrUiState>,
    pub stabilization: Arc<StabilizationUiState>,
    pub flip_lens: Arc<FlipLensUiState>,
    pub stream_config: Arc<StreamConfigUiState>,
    pub video_quality: Arc<VideoQualityUiState>,
    pub frame_rate: Arc<FrameRateUiState>,
    pub zoom: Arc<ZoomUiState>,
    pub elapsed_time: Arc<ElapsedTimeUiState>,
    pub audio: Arc<AudioUiState>,
    pub capture_button: Arc<CaptureButtonUiState>,
}

impl CaptureUiState {
    pub fn ready(&self) -> Option<&ReadyCaptureUiState> {
        match self {
            CaptureUiState::NotReady => None,
            CaptureUiState::Ready(ready) => Some(ready),
        }
    }
}

fn track<T: DerivedUiState>(
    current: &Arc<T>,
    inputs: &StateInputs<'_>,
    changed: &mut bool,
) -> Arc<T> {
    let next = reconcile_shared(current, inputs);
    if !Arc::ptr_eq(&next, current) {
        *changed = true;
    }
    next
}

impl DerivedUiState for ReadyCaptureUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        Self {
            external_capture_mode: inputs.external_capture_mode,
            flash_mode: Arc::new(FlashModeUiState::derive(inputs)),
            aspect_ratio: Arc::new(AspectRatioUiState::derive(inputs)),
            capture_mode: Arc::new(CaptureModeUiState::derive(inputs)),
            concurrent_camera: Arc::new(ConcurrentCameraUiState::derive(inputs)),
            hdr: Arc::new(HdrUiState::derive(inputs)),
            stabilization: Arc::new(StabilizationUiState::derive(inputs)),
            flip_lens: Arc::new(FlipLensUiState::derive(inputs)),
            stream_config: Arc::new(StreamConfigUiState::derive(inputs)),
            video_quality: Arc::new(VideoQualityUiState::derive(inputs)),
            frame_rate: Arc::new(FrameRateUiState::derive(inputs)),
            zoom: Arc::new(ZoomUiState::derive(inputs)),
            elapsed_time: Arc::new(ElapsedTimeUiState::derive(inputs)),
            audio: Arc::new(AudioUiState::derive(inputs)),
            capture_button: Arc::new(CaptureButtonUiState::derive(inputs)),
        }
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        let mut changed = self.external_capture_mode != inputs.external_capture_mode;
        let next = Self {
            external_capture_mode: inputs.external_capture_mode,
            flash_mode: track(&self.flash_mode, inputs, &mut changed),
            aspect_ratio: track(&self.aspect_ratio, inputs, &mut changed),
            capture_mode: track(&self.capture_mode, inputs, &mut changed),
            concurrent_camera: track(&self.concurrent_camera, inputs, &mut changed),
            hdr: track(&self.hdr, inputs, &mut changed),
            stabilization: track(&self.stabilization, inputs, &mut changed),
            flip_lens: track(&self.flip_lens, inputs, &mut changed),
            stream_config: track(&self.stream_config, inputs, &mut changed),
            video_quality: track(&self.video_quality, inputs, &mut changed),
            frame_rate: track(&self.frame_rate, inputs, &mut changed),
            zoom: track(&self.zoom, inputs, &mut changed),
            elapsed_time: track(&self.elapsed_time, inputs, &mut changed),
            audio: track(&self.audio, inputs, &mut changed),
            capture_button: track(&self.capture_button, inputs, &mut changed),
        };
        changed.then_some(next)
    }
}

impl DerivedUiState for CaptureUiState {
    fn derive(inputs: &StateInputs<'_>) -> Self {
        if inputs.lens_constraints().is_none() {
            return CaptureUiState::NotReady;
        }
        CaptureUiState::Ready(ReadyCaptureUiState::derive(inputs))
    }

    fn reconcile(&self, inputs: &StateInputs<'_>) -> Option<Self> {
        match self {
            CaptureUiState::Ready(ready) if inputs.lens_constraints().is_some() => {
                ready.reconcile(inputs).map(CaptureUiState::Ready)
            }
            _ => {
                let next = Self::derive(inputs);
                (next != *self).then_some(next)
            }
        }
    }
}
