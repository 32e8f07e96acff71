// SPDX-License-Identifier: MPL-2.0

//! Capture controller
//!
//! The controller is the single writer of the capture screen: it owns the
//! settings, the camera's constraints and runtime state, and the derived
//! [`CaptureUiState`](crate::ui_state::CaptureUiState).
//!
//! # Architecture
//!
//! - `state`: The controller and its output channels
//! - `message`: Everything the controller reacts to
//! - `update`: Message dispatch and the async run loop
//! - `handlers`: Message handlers grouped by domain
//! - `snackbar`: Transient user-facing error messages

pub mod handlers;
pub mod message;
pub mod snackbar;
mod state;
mod update;

pub use message::Message;
pub use snackbar::{SnackbarData, SnackbarKind};
pub use state::{CaptureController, ControllerChannels};
