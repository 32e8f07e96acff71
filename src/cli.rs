// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for deriving and inspecting capture UI state
//!
//! These commands run the same derivation as the app, without a camera.

use crate::SettingsChanges;
use camera_ui_state::camera::{CameraState, CameraSystemConstraints};
use camera_ui_state::constants::ExternalCaptureMode;
use camera_ui_state::errors::{AppError, AppResult};
use camera_ui_state::storage::{JsonSettingsStore, MemorySettingsStore, SettingsRepository};
use camera_ui_state::{
    CameraAppSettings, CaptureController, CaptureUiState, DerivedUiState, Message, StateInputs,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Settings store at `path`, or at the default location
pub fn settings_store(path: Option<PathBuf>) -> JsonSettingsStore {
    match path {
        Some(path) => JsonSettingsStore::new(path),
        None => JsonSettingsStore::default(),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Derive the UI state for one set of inputs
///
/// With `raw`, stored settings skip normalisation, so a selection the
/// constraints do not allow aborts with the invariant violation.
pub fn derive_state(
    store: &JsonSettingsStore,
    constraints: Option<PathBuf>,
    state: Option<PathBuf>,
    external: ExternalCaptureMode,
    raw: bool,
) -> CliResult {
    let constraints = match constraints {
        Some(path) => read_json(&path)?,
        None => CameraSystemConstraints::example(),
    };
    let camera_state = match state {
        Some(path) => read_json(&path)?,
        None => CameraState {
            is_camera_running: true,
            ..Default::default()
        },
    };

    let mut settings = store.load()?;
    if !raw {
        settings = settings.constrained_to(&constraints, external);
    }

    let inputs = StateInputs::new(&settings, &constraints, &camera_state, external);
    print_json(&CaptureUiState::derive(&inputs))
}

pub fn show_settings(store: &JsonSettingsStore) -> CliResult {
    eprintln!("Settings file: {}", store.path().display());
    print_json(&store.load()?)
}

pub fn reset_settings(store: &JsonSettingsStore) -> CliResult {
    store.save(&CameraAppSettings::default())?;
    println!("Settings reset: {}", store.path().display());
    Ok(())
}

pub fn set_settings(store: &JsonSettingsStore, changes: SettingsChanges) -> CliResult {
    let mut settings = store.load()?;

    if let Some(lens) = changes.lens {
        settings.camera_lens_facing = lens;
    }
    if let Some(flash) = changes.flash {
        settings.flash_mode = flash;
    }
    if let Some(mode) = changes.capture_mode {
        settings.capture_mode = mode;
    }
    if let Some(ratio) = changes.aspect_ratio {
        settings.aspect_ratio = ratio;
    }
    if let Some(config) = changes.stream_config {
        settings.stream_config = config;
    }
    if let Some(mode) = changes.stabilization {
        settings.stabilization_mode = mode;
    }
    if let Some(range) = changes.dynamic_range {
        settings.dynamic_range = range;
    }
    if let Some(format) = changes.image_format {
        settings.image_format = format;
    }
    if let Some(quality) = changes.video_quality {
        settings.video_quality = quality;
    }
    if let Some(fps) = changes.frame_rate {
        settings.target_frame_rate = fps;
    }
    if let Some(mode) = changes.concurrent {
        settings.concurrent_camera_mode = mode;
    }
    if let Some(mode) = changes.dark_mode {
        settings.dark_mode = mode;
    }
    if let Some(enabled) = changes.audio {
        settings.audio_enabled = enabled;
    }
    if let Some(secs) = changes.max_video_duration {
        settings.max_video_duration_ms = (secs > 0).then(|| secs * 1000);
    }

    store.save(&settings)?;
    print_json(&settings)
}

/// Parse a JSON Lines script, skipping blank lines and `#` comments
fn read_script(path: &Path) -> AppResult<Vec<(usize, Message)>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            serde_json::from_str(line)
                .map(|message| (line_no, message))
                .map_err(|e| AppError::Config(format!("{}:{}: {}", path.display(), line_no, e)))
        })
        .collect()
}

/// Run a message script through the controller, one JSON line per step
///
/// Each step prints the message, whether it was rejected, the camera
/// commands it produced and the UI state when a new one was published.
pub fn replay(
    store: &JsonSettingsStore,
    script: PathBuf,
    external: ExternalCaptureMode,
    persist: bool,
) -> CliResult {
    let messages = read_script(&script)?;
    info!(steps = messages.len(), script = %script.display(), "Replaying message script");

    let repository: Box<dyn SettingsRepository> = if persist {
        Box::new(store.clone())
    } else {
        Box::new(MemorySettingsStore::new(store.load()?))
    };
    let (mut controller, mut channels) = CaptureController::new(repository, external);

    for (line, message) in messages {
        let result = controller.update(message.clone());

        let mut commands = Vec::new();
        while let Ok(command) = channels.commands.try_recv() {
            commands.push(command);
        }

        let ui_state = if channels.ui_state.has_changed()? {
            Some(channels.ui_state.borrow_and_update().clone())
        } else {
            None
        };

        let step = serde_json::json!({
            "line": line,
            "message": message,
            "error": result.err().map(|e| e.to_string()),
            "commands": commands,
            "ui_state": ui_state,
        });
        println!("{}", serde_json::to_string(&step)?);
    }

    for snackbar in controller.snackbars() {
        eprintln!("snackbar: {}", snackbar.message);
    }
    Ok(())
}

pub fn constraints_template() -> CliResult {
    print_json(&CameraSystemConstraints::example())
}
