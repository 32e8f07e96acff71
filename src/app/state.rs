// SPDX-License-Identifier: GPL-3.0-only

//! Capture controller state

use super::snackbar::{SnackbarData, SnackbarKind, messages};
use crate::camera::{CameraCommand, CameraState, CameraSystemConstraints, diff_settings};
use crate::config::CameraAppSettings;
use crate::constants::ExternalCaptureMode;
use crate::errors::{AppResult, CameraError};
use crate::storage::SettingsRepository;
use crate::ui_state::{CaptureUiState, StateInputs, reconcile_shared};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Stand-in until the camera reports its constraints
static NO_CONSTRAINTS: CameraSystemConstraints = CameraSystemConstraints {
    available_lenses: Vec::new(),
    concurrent_cameras_supported: false,
    per_lens_constraints: BTreeMap::new(),
};

/// The single writer of the capture screen state
///
/// Owns the settings, the latest constraints and camera state, and the
/// derived [`CaptureUiState`]. Every input goes through
/// [`CaptureController::update`]; derived state is published on a watch
/// channel and camera commands on an unbounded mpsc channel.
pub struct CaptureController {
    /// Effective settings (already constrained once constraints are known)
    pub(crate) settings: CameraAppSettings,
    /// Latest constraints, `None` until the camera reports them
    pub(crate) system_constraints: Option<CameraSystemConstraints>,
    pub(crate) camera_state: CameraState,
    pub(crate) external_capture_mode: ExternalCaptureMode,
    pub(crate) ui_state: Arc<CaptureUiState>,
    ui_tx: watch::Sender<Arc<CaptureUiState>>,
    command_tx: mpsc::UnboundedSender<CameraCommand>,
    pub(crate) store: Box<dyn SettingsRepository>,
    snackbars: VecDeque<SnackbarData>,
    next_snackbar_id: u64,
}

/// Receiving ends handed out when a controller is created
pub struct ControllerChannels {
    /// Derived UI state; only wakes when the state instance changes
    pub ui_state: watch::Receiver<Arc<CaptureUiState>>,
    /// Commands for the camera system
    pub commands: mpsc::UnboundedReceiver<CameraCommand>,
}

impl CaptureController {
    /// Create a controller, loading settings from `store`
    ///
    /// A failed load falls back to defaults and queues a snackbar.
    pub fn new(
        store: Box<dyn SettingsRepository>,
        external_capture_mode: ExternalCaptureMode,
    ) -> (Self, ControllerChannels) {
        let ui_state = Arc::new(CaptureUiState::NotReady);
        let (ui_tx, ui_rx) = watch::channel(Arc::clone(&ui_state));
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let mut controller = Self {
            settings: CameraAppSettings::default(),
            system_constraints: None,
            camera_state: CameraState::default(),
            external_capture_mode,
            ui_state,
            ui_tx,
            command_tx,
            store,
            snackbars: VecDeque::new(),
            next_snackbar_id: 0,
        };

        match controller.store.load() {
            Ok(settings) => controller.settings = settings,
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                controller.push_snackbar(messages::SETTINGS_NOT_LOADED, SnackbarKind::Error);
            }
        }
        info!(external_mode = ?external_capture_mode, "Capture controller created");

        (
            controller,
            ControllerChannels {
                ui_state: ui_rx,
                commands: command_rx,
            },
        )
    }

    pub fn settings(&self) -> &CameraAppSettings {
        &self.settings
    }

    pub fn camera_state(&self) -> &CameraState {
        &self.camera_state
    }

    /// Current derived state
    pub fn ui_state(&self) -> Arc<CaptureUiState> {
        Arc::clone(&self.ui_state)
    }

    /// Pending snackbars, oldest first
    pub fn snackbars(&self) -> impl Iterator<Item = &SnackbarData> {
        self.snackbars.iter()
    }

    pub(crate) fn inputs(&self) -> StateInputs<'_> {
        StateInputs::new(
            &self.settings,
            self.system_constraints.as_ref().unwrap_or(&NO_CONSTRAINTS),
            &self.camera_state,
            self.external_capture_mode,
        )
    }

    /// Re-derive the UI state and publish it if any concern changed
    pub(crate) fn refresh(&mut self) {
        let next = {
            let inputs = self.inputs();
            reconcile_shared(&self.ui_state, &inputs)
        };
        if Arc::ptr_eq(&next, &self.ui_state) {
            return;
        }
        self.ui_state = Arc::clone(&next);
        self.ui_tx.send_if_modified(|current| {
            if Arc::ptr_eq(current, &next) {
                false
            } else {
                *current = next;
                true
            }
        });
        debug!("Capture UI state updated");
    }

    /// Apply a new settings snapshot
    ///
    /// The snapshot is constrained to the camera's support first, then
    /// persisted, and the difference is sent to the camera as commands.
    /// A failed save is reported but the new settings stay in effect.
    pub(crate) fn commit_settings(&mut self, next: CameraAppSettings) -> AppResult<()> {
        let next = match &self.system_constraints {
            Some(system) => next.constrained_to(system, self.external_capture_mode),
            None => next,
        };
        if next == self.settings {
            return Ok(());
        }

        let commands = diff_settings(&self.settings, &next);
        self.settings = next;

        if let Err(e) = self.store.save(&self.settings) {
            warn!(error = %e, "Failed to persist settings");
            self.push_snackbar(messages::SETTINGS_NOT_SAVED, SnackbarKind::Error);
        }

        let sent = self.send_commands(commands);
        self.refresh();
        sent
    }

    /// Mutate a copy of the settings and commit it
    pub(crate) fn update_settings(
        &mut self,
        change: impl FnOnce(&mut CameraAppSettings),
    ) -> AppResult<()> {
        let mut next = self.settings.clone();
        change(&mut next);
        self.commit_settings(next)
    }

    pub(crate) fn send_commands(&mut self, commands: Vec<CameraCommand>) -> AppResult<()> {
        for command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }

    pub(crate) fn send_command(&mut self, command: CameraCommand) -> AppResult<()> {
        debug!(?command, "Sending camera command");
        if self.command_tx.send(command).is_err() {
            warn!("Camera command receiver dropped");
            self.push_snackbar(messages::CAMERA_UNREACHABLE, SnackbarKind::Error);
            return Err(CameraError::ChannelClosed.into());
        }
        Ok(())
    }

    pub(crate) fn push_snackbar(&mut self, message: &str, kind: SnackbarKind) {
        let id = self.next_snackbar_id;
        self.next_snackbar_id += 1;
        self.snackbars.push_back(SnackbarData {
            id,
            message: message.to_string(),
            kind,
        });
    }

    pub(crate) fn dismiss_snackbar(&mut self, id: u64) {
        self.snackbars.retain(|snackbar| snackbar.id != id);
    }
}
