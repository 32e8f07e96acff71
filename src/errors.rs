// SPDX-License-Identifier: MPL-2.0

//! Error types for the camera UI state layer
//!
//! Recoverable failures (settings I/O, rejected user actions, a camera that
//! stopped listening) are values of [`AppError`]. A selection that is missing
//! from its own option list is not recoverable: it is reported through
//! [`UiStateError`] and turned into a panic by the reconcilers. The same
//! type rejects malformed zoom ranges while constraints are parsed.

use crate::ui_state::DisabledReason;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// Settings persistence errors
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    /// A user action that the current UI state does not allow
    #[error("Action rejected: {0}")]
    Action(#[from] ActionError),
    /// Camera command delivery errors
    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Settings store errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed
    #[error("I/O failure on {path}: {message}")]
    Io { path: String, message: String },
    /// The settings file is not valid JSON for the current schema
    #[error("Cannot parse {path}: {message}")]
    Parse { path: String, message: String },
    /// Settings could not be encoded
    #[error("Cannot encode settings: {0}")]
    Encode(String),
}

/// Reasons a user action is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Constraints have not arrived yet
    #[error("camera is not ready")]
    NotReady,
    /// The control for this concern is not shown at all
    #[error("{concern} is unavailable")]
    Unavailable { concern: &'static str },
    /// The requested value is not offered for this concern
    #[error("{value} is not offered for {concern}")]
    NotOffered {
        concern: &'static str,
        value: String,
    },
    /// The requested value is offered but greyed out
    #[error("{value} is disabled for {concern}: {}", .reason.message())]
    Disabled {
        concern: &'static str,
        value: String,
        reason: DisabledReason,
    },
    /// The capture button cannot perform this now
    #[error("cannot {0} right now")]
    CaptureRejected(&'static str),
}

/// Camera command delivery errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum CameraError {
    /// The camera side dropped its command receiver
    #[error("Camera command channel closed")]
    ChannelClosed,
}

/// State-consistency violations inside the reconcilers
///
/// A missing selection signals a bug in upstream settings/constraints
/// synchronisation and is never handed back to callers as a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UiStateError {
    /// The selected value is absent from the selectable options
    #[error("{concern}: selected {selected} is not among the selectable options [{options}]")]
    SelectionUnavailable {
        concern: &'static str,
        selected: String,
        options: String,
    },
    /// Range bounds that are inverted, non-positive or not finite
    #[error("{concern}: invalid range {min}..={max}")]
    InvalidRange {
        concern: &'static str,
        min: f32,
        max: f32,
    },
}
