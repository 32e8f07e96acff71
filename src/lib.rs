// SPDX-License-Identifier: MPL-2.0

//! Camera UI State - capture screen state reconciliation for a camera app
//!
//! This library turns user settings, camera constraints and live camera state
//! into the immutable state the capture screen renders, and keeps that state
//! consistent as any of the three change.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`ui_state`]: Per-control UI states and their reconcilers
//! - [`camera`]: Camera constraints, runtime state and commands
//! - [`app`]: The capture controller that owns and publishes the state
//! - [`config`]: User settings and their normalisation to camera support
//! - [`storage`]: Settings persistence
//!
//! # Example
//!
//! ```
//! use camera_ui_state::camera::{CameraState, CameraSystemConstraints};
//! use camera_ui_state::constants::ExternalCaptureMode;
//! use camera_ui_state::ui_state::{CaptureUiState, DerivedUiState, StateInputs};
//! use camera_ui_state::CameraAppSettings;
//!
//! let constraints = CameraSystemConstraints::example();
//! let settings = CameraAppSettings::default()
//!     .constrained_to(&constraints, ExternalCaptureMode::Standard);
//! let state = CameraState::default();
//! let inputs = StateInputs::new(&settings, &constraints, &state, ExternalCaptureMode::Standard);
//! assert!(CaptureUiState::derive(&inputs).ready().is_some());
//! ```

pub mod app;
pub mod camera;
pub mod config;
pub mod constants;
pub mod errors;
pub mod storage;
pub mod ui_state;

// Re-export commonly used types
pub use app::{CaptureController, ControllerChannels, Message};
pub use config::CameraAppSettings;
pub use errors::{AppError, AppResult};
pub use ui_state::{CaptureUiState, DerivedUiState, StateInputs};
