// SPDX-License-Identifier: GPL-3.0-only

//! Camera-side updates: constraints, runtime state and external settings reloads

use crate::app::snackbar::{SnackbarKind, messages};
use crate::app::state::CaptureController;
use crate::camera::{CameraState, CameraSystemConstraints};
use crate::errors::AppResult;
use tracing::{debug, info, warn};

impl CaptureController {
    // =========================================================================
    // Camera Event Handlers
    // =========================================================================

    /// New constraints re-sync the settings before anything is derived
    pub(crate) fn handle_constraints_changed(
        &mut self,
        constraints: CameraSystemConstraints,
    ) -> AppResult<()> {
        info!(
            lenses = ?constraints.available_lenses,
            concurrent = constraints.concurrent_cameras_supported,
            "Camera constraints changed"
        );
        self.system_constraints = Some(constraints);

        let result = self.commit_settings(self.settings.clone());
        // Nothing may have changed in the settings, but the option lists did
        self.refresh();
        result
    }

    pub(crate) fn handle_camera_state_changed(&mut self, state: CameraState) -> AppResult<()> {
        if state == self.camera_state {
            return Ok(());
        }
        if state.is_camera_running != self.camera_state.is_camera_running {
            info!(running = state.is_camera_running, "Camera running state changed");
        }
        debug!(?state, "Camera state changed");
        self.camera_state = state;
        self.refresh();
        Ok(())
    }

    pub(crate) fn handle_settings_reloaded(&mut self) -> AppResult<()> {
        match self.store.load() {
            Ok(settings) => {
                info!("Reloading settings from store");
                self.commit_settings(settings)
            }
            Err(e) => {
                warn!(error = %e, "Failed to reload settings, keeping current ones");
                self.push_snackbar(messages::SETTINGS_NOT_LOADED, SnackbarKind::Error);
                Err(e)
            }
        }
    }

    pub(crate) fn handle_dismiss_snackbar(&mut self, id: u64) -> AppResult<()> {
        self.dismiss_snackbar(id);
        Ok(())
    }
}
