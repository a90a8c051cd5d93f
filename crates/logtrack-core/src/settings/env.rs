//! Environment variable seeding

use std::env;

use once_cell::sync::Lazy;
use serde_json::{Number, Value};

use super::traits::SettingsStore;
use super::{DEFAULT_LOG_FILE_KEY, VERBOSITY_KEY};

/// Mapping from environment variable names to settings keys
static ENV_VAR_MAP: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("LOGTRACK_VERBOSITY_LEVEL", VERBOSITY_KEY),
        ("LOGTRACK_DEFAULT_LOG_FILE", DEFAULT_LOG_FILE_KEY),
    ]
});

/// Get the settings key an environment variable seeds, if any
pub fn setting_for_env_var(name: &str) -> Option<&'static str> {
    ENV_VAR_MAP
        .iter()
        .find(|(var, _)| *var == name)
        .map(|(_, key)| *key)
}

/// Seed `store` from the process environment
pub fn seed_from_env(store: &dyn SettingsStore) -> usize {
    seed_from_vars(store, env::vars())
}

/// Seed `store` from `(name, value)` pairs, returning how many settings were written
///
/// Numeric-looking values are stored as numbers, everything else as strings.
/// A malformed verbosity is stored as-is so the logger reports it on first use.
/// Empty values are skipped.
pub fn seed_from_vars<I, K, V>(store: &dyn SettingsStore, vars: I) -> usize
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut written = 0;
    for (name, raw) in vars {
        let Some(key) = setting_for_env_var(name.as_ref()) else {
            continue;
        };
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            continue;
        }

        let value = if key == VERBOSITY_KEY {
            parse_number(raw).unwrap_or_else(|| Value::String(raw.to_string()))
        } else {
            Value::String(raw.to_string())
        };

        if store.set(key, value).is_ok() {
            written += 1;
        }
    }
    written
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Value::from(i));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsStore;
    use serde_json::json;

    #[test]
    fn test_setting_for_env_var() {
        assert_eq!(setting_for_env_var("LOGTRACK_VERBOSITY_LEVEL"), Some(VERBOSITY_KEY));
        assert_eq!(setting_for_env_var("LOGTRACK_DEFAULT_LOG_FILE"), Some(DEFAULT_LOG_FILE_KEY));
        assert_eq!(setting_for_env_var("HOME"), None);
    }

    #[test]
    fn test_seed_numbers_and_paths() {
        let store = MemorySettingsStore::new();
        let written = seed_from_vars(
            &store,
            [
                ("LOGTRACK_VERBOSITY_LEVEL", " 4 "),
                ("LOGTRACK_DEFAULT_LOG_FILE", "/var/log/app.log"),
                ("PATH", "/usr/bin"),
            ],
        );

        assert_eq!(written, 2);
        assert_eq!(store.get(VERBOSITY_KEY), Some(json!(4)));
        assert_eq!(store.get(DEFAULT_LOG_FILE_KEY), Some(json!("/var/log/app.log")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_seed_fractional_verbosity() {
        let store = MemorySettingsStore::new();
        seed_from_vars(&store, [("LOGTRACK_VERBOSITY_LEVEL", "2.5")]);
        assert_eq!(store.get(VERBOSITY_KEY), Some(json!(2.5)));
    }

    #[test]
    fn test_seed_keeps_malformed_verbosity_as_string() {
        let store = MemorySettingsStore::new();
        seed_from_vars(&store, [("LOGTRACK_VERBOSITY_LEVEL", "loud")]);
        assert_eq!(store.get(VERBOSITY_KEY), Some(json!("loud")));
    }

    #[test]
    fn test_seed_skips_empty() {
        let store = MemorySettingsStore::new();
        let written = seed_from_vars(&store, [("LOGTRACK_DEFAULT_LOG_FILE", "  ")]);
        assert_eq!(written, 0);
        assert!(store.is_empty());
    }
}
