// SPDX-License-Identifier: MPL-2.0

//! Storage utilities for persisting user settings
//!
//! Settings are written as a small versioned JSON envelope. A missing file
//! yields defaults; a file from another schema version is ignored with a
//! warning and replaced on the next save.

use crate::config::CameraAppSettings;
use crate::errors::{AppResult, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Bump when a settings field changes meaning
pub const SETTINGS_VERSION: u32 = 1;

/// Environment variable overriding the settings file location
pub const SETTINGS_PATH_ENV: &str = "CAMERA_UI_STATE_SETTINGS";

const APP_DIR: &str = "camera-ui-state";
const SETTINGS_FILE: &str = "settings.json";

/// Where settings are loaded from and saved to
pub trait SettingsRepository: Send {
    fn load(&self) -> AppResult<CameraAppSettings>;
    fn save(&self, settings: &CameraAppSettings) -> AppResult<()>;
}

#[derive(Serialize, Deserialize)]
struct SettingsEnvelope {
    version: u32,
    settings: CameraAppSettings,
}

/// Get the default settings file path
///
/// `$CAMERA_UI_STATE_SETTINGS` wins, then the platform config directory,
/// then the working directory.
pub fn default_settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SETTINGS_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}

/// Settings persisted to a JSON file
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl Default for JsonSettingsStore {
    fn default() -> Self {
        Self::new(default_settings_path())
    }
}

impl SettingsRepository for JsonSettingsStore {
    fn load(&self) -> AppResult<CameraAppSettings> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(CameraAppSettings::default());
            }
            Err(e) => return Err(self.io_error(e).into()),
        };

        let envelope: SettingsEnvelope =
            serde_json::from_str(&contents).map_err(|e| SettingsError::Parse {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        if envelope.version != SETTINGS_VERSION {
            warn!(
                path = %self.path.display(),
                found = envelope.version,
                expected = SETTINGS_VERSION,
                "Settings version mismatch, using defaults"
            );
            return Ok(CameraAppSettings::default());
        }

        debug!(path = %self.path.display(), "Loaded settings");
        Ok(envelope.settings)
    }

    fn save(&self, settings: &CameraAppSettings) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let envelope = SettingsEnvelope {
            version: SETTINGS_VERSION,
            settings: settings.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|e| SettingsError::Encode(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// Settings kept in memory, shared between clones
///
/// Used by tests and by one-shot CLI runs that must not touch the disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: Arc<Mutex<CameraAppSettings>>,
    fail_saves: bool,
}

impl MemorySettingsStore {
    pub fn new(settings: CameraAppSettings) -> Self {
        Self {
            settings: Arc::new(Mutex::new(settings)),
            fail_saves: false,
        }
    }

    /// A store whose saves always fail, for exercising error paths
    pub fn failing(settings: CameraAppSettings) -> Self {
        Self {
            fail_saves: true,
            ..Self::new(settings)
        }
    }

    /// Last saved settings
    pub fn snapshot(&self) -> CameraAppSettings {
        match self.settings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SettingsRepository for MemorySettingsStore {
    fn load(&self) -> AppResult<CameraAppSettings> {
        Ok(self.snapshot())
    }

    fn save(&self, settings: &CameraAppSettings) -> AppResult<()> {
        if self.fail_saves {
            return Err(SettingsError::Io {
                path: "<memory>".to_string(),
                message: "saving disabled".to_string(),
            }
            .into());
        }
        match self.settings.lock() {
            Ok(mut guard) => *guard = settings.clone(),
            Err(poisoned) => *poisoned.into_inner() = settings.clone(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FlashMode;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), CameraAppSettings::default());
    }

    #[test]
    fn test_save_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path().join("nested/dir/settings.json"));
        let settings = CameraAppSettings {
            flash_mode: FlashMode::Auto,
            ..Default::default()
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_version_mismatch_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"version": 999, "settings": {"flash_mode": "On"}}"#,
        )
        .unwrap();
        let store = JsonSettingsStore::new(&path);
        assert_eq!(store.load().unwrap(), CameraAppSettings::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"version": 1, "settings": {"flash_mode": "On"}}"#).unwrap();
        let loaded = JsonSettingsStore::new(&path).load().unwrap();
        assert_eq!(loaded.flash_mode, FlashMode::On);
        assert!(loaded.audio_enabled);
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        let err = JsonSettingsStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Cannot parse"));
    }

    #[test]
    fn test_failing_memory_store() {
        let store = MemorySettingsStore::failing(CameraAppSettings::default());
        assert!(store.save(&CameraAppSettings::default()).is_err());
    }
}
