//! Settings store trait

use std::mem;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during settings operations
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("setting '{0}' was not set")]
    Missing(String),

    #[error("setting '{key}' has type {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Settings error: {0}")]
    Other(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Process-wide key/value settings with dynamically typed values
///
/// Implementations:
/// - `MemorySettingsStore`: in-memory, optionally seeded from the environment
/// - `FileSettingsStore`: YAML file on disk
///
/// Any part of the host application may write to the store at any time,
/// so readers must re-validate what they get.
pub trait SettingsStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Read a setting
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a setting
    fn set(&self, key: &str, value: Value) -> SettingsResult<()>;

    /// Remove a setting, returning the previous value
    fn remove(&self, key: &str) -> SettingsResult<Option<Value>>;

    /// Check if a setting exists
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Make sure `key` holds a value of the same JSON type as `default`
    ///
    /// When the slot is absent, null, or holds another type, `default` is
    /// written and an error describing the correction is returned. Otherwise
    /// the current value is returned untouched.
    fn force_type(&self, key: &str, default: Value) -> SettingsResult<Value> {
        let correction = match self.get(key) {
            None | Some(Value::Null) => SettingsError::Missing(key.to_string()),
            Some(current) if same_kind(&current, &default) => return Ok(current),
            Some(current) => SettingsError::TypeMismatch {
                key: key.to_string(),
                expected: kind_name(&default),
                found: kind_name(&current),
            },
        };

        self.set(key, default)?;
        Err(correction)
    }
}

/// Whether two values share a JSON type
pub fn same_kind(a: &Value, b: &Value) -> bool {
    mem::discriminant(a) == mem::discriminant(b)
}

/// JSON type name of a value
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
