// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;

/// A transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnackbarData {
    pub id: u64,
    pub message: String,
    pub kind: SnackbarKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnackbarKind {
    Info,
    Error,
}

pub mod messages {
    pub const SETTINGS_NOT_SAVED: &str = "Settings could not be saved";
    pub const SETTINGS_NOT_LOADED: &str = "Settings could not be loaded";
    pub const CAMERA_UNREACHABLE: &str = "Camera is not responding";
}
