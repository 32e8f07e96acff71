// SPDX-License-Identifier: GPL-3.0-only

//! Camera system boundary
//!
//! The camera itself is an external collaborator. This module holds what
//! crosses the boundary: the capability constraints it reports, the runtime
//! state it pushes, and the commands it is sent.

pub mod commands;
pub mod constraints;
pub mod state;

pub use commands::{CameraCommand, diff_settings};
pub use constraints::{CameraConstraints, CameraSystemConstraints, ZoomRange};
pub use state::{CameraState, LowLightBoostState, VideoRecordingState};
