//! In-memory settings store

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use super::env::seed_from_env;
use super::traits::{SettingsResult, SettingsStore};

/// In-memory settings store
///
/// This is the default process-wide store. Settings are lost when the store
/// is dropped.
///
/// # Thread Safety
///
/// Individual reads and writes are atomic. Sequences of them are not.
///
/// # Example
///
/// ```
/// use logtrack_core::settings::{SettingsStore, MemorySettingsStore};
/// use serde_json::json;
///
/// let store = MemorySettingsStore::new();
/// store.set("logtrack_verbosity_level", json!(4)).unwrap();
/// assert_eq!(store.get("logtrack_verbosity_level"), Some(json!(4)));
/// ```
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySettingsStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store with initial values
    pub fn with_values(initial: HashMap<String, Value>) -> Self {
        Self {
            values: RwLock::new(initial),
        }
    }

    /// Create a store seeded from `LOGTRACK_*` environment variables
    pub fn from_env() -> Self {
        let store = Self::new();
        seed_from_env(&store);
        store
    }

    /// Clear all settings
    pub fn clear(&self) {
        self.values.write().clear();
    }

    /// Get the number of settings in the store
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsStore for MemorySettingsStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> SettingsResult<()> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> SettingsResult<Option<Value>> {
        Ok(self.values.write().remove(key))
    }
}

impl Clone for MemorySettingsStore {
    fn clone(&self) -> Self {
        Self {
            values: RwLock::new(self.values.read().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsError;
    use serde_json::json;

    #[test]
    fn test_memory_store_name() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn test_memory_store_crud() {
        let store = MemorySettingsStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get("key"), None);

        store.set("key", json!("value")).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains("key"));

        store.set("key", json!(7)).unwrap();
        assert_eq!(store.get("key"), Some(json!(7)));

        assert_eq!(store.remove("key").unwrap(), Some(json!(7)));
        assert!(!store.contains("key"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_force_type_keeps_matching_value() {
        let store = MemorySettingsStore::new();
        store.set("level", json!(4)).unwrap();

        let value = store.force_type("level", json!(3)).unwrap();
        assert_eq!(value, json!(4));
        assert_eq!(store.get("level"), Some(json!(4)));
    }

    #[test]
    fn test_force_type_fills_missing() {
        let store = MemorySettingsStore::new();

        let err = store.force_type("level", json!(3)).unwrap_err();
        assert!(matches!(err, SettingsError::Missing(_)));
        assert_eq!(store.get("level"), Some(json!(3)));

        // Second call finds the default in place
        assert_eq!(store.force_type("level", json!(3)).unwrap(), json!(3));
    }

    #[test]
    fn test_force_type_replaces_null() {
        let store = MemorySettingsStore::new();
        store.set("level", Value::Null).unwrap();

        assert!(matches!(
            store.force_type("level", json!(3)),
            Err(SettingsError::Missing(_))
        ));
        assert_eq!(store.get("level"), Some(json!(3)));
    }

    #[test]
    fn test_force_type_replaces_wrong_type() {
        let store = MemorySettingsStore::new();
        store.set("level", json!("loud")).unwrap();

        let err = store.force_type("level", json!(3)).unwrap_err();
        match err {
            SettingsError::TypeMismatch { key, expected, found } => {
                assert_eq!(key, "level");
                assert_eq!(expected, "number");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.get("level"), Some(json!(3)));
    }

    #[test]
    fn test_memory_store_clone() {
        let store = MemorySettingsStore::new();
        store.set("key", json!(1)).unwrap();

        let cloned = store.clone();
        cloned.set("key", json!(2)).unwrap();

        assert_eq!(store.get("key"), Some(json!(1)));
        assert_eq!(cloned.get("key"), Some(json!(2)));
    }

    #[test]
    fn test_memory_store_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemorySettingsStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let store_clone = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                let key = format!("key_{}", i);
                store_clone.set(&key, json!(i)).unwrap();
                assert_eq!(store_clone.get(&key), Some(json!(i)));
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 10);
    }
}
