//! File-based settings store (YAML)
//!
//! The user-level file lives at `~/.config/logtrack/settings.yaml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::{SettingsResult, SettingsStore};

/// Settings file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SettingsFile {
    /// Settings by key, kept sorted so saved files diff cleanly
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

/// File-based settings store
///
/// Reads and writes settings from a YAML mapping. Every `set` and `remove`
/// is written through to disk. If the file cannot be parsed, reads see no
/// settings and writes fail rather than overwrite it.
///
/// # Example
///
/// ```no_run
/// use logtrack_core::settings::{FileSettingsStore, SettingsStore};
///
/// let store = FileSettingsStore::user();
/// let level = store.get("logtrack_verbosity_level");
/// ```
pub struct FileSettingsStore {
    path: PathBuf,
    cache: RwLock<Option<SettingsFile>>,
}

impl FileSettingsStore {
    /// Create a new file settings store for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Create a user-level store (~/.config/logtrack/settings.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("logtrack").join("settings.yaml"))
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the settings file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> SettingsResult<SettingsFile> {
        if !self.path.exists() {
            return Ok(SettingsFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SettingsFile::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    fn save(&self, settings: &SettingsFile) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(settings)?;
        fs::write(&self.path, content)?;

        *self.cache.write() = Some(settings.clone());
        Ok(())
    }

    /// Get cached or load settings
    fn settings(&self) -> SettingsResult<SettingsFile> {
        if let Some(settings) = self.cache.read().as_ref() {
            return Ok(settings.clone());
        }

        let settings = self.load()?;
        *self.cache.write() = Some(settings.clone());
        Ok(settings)
    }

    /// Reload settings from disk (invalidate cache)
    pub fn reload(&self) -> SettingsResult<SettingsFile> {
        let settings = self.load()?;
        *self.cache.write() = Some(settings.clone());
        Ok(settings)
    }
}

impl SettingsStore for FileSettingsStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.settings().ok()?.values.get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> SettingsResult<()> {
        let mut settings = self.settings()?;
        settings.values.insert(key.to_string(), value);
        self.save(&settings)
    }

    fn remove(&self, key: &str) -> SettingsResult<Option<Value>> {
        let mut settings = self.settings()?;
        let previous = settings.values.remove(key);
        if previous.is_some() {
            self.save(&settings)?;
        }
        Ok(previous)
    }
}
