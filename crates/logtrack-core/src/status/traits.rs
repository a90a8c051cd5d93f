//! Status record and reporter trait

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Severity of a status record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusLevel {
    Init,
    Warn,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Init => write!(f, "INIT"),
            StatusLevel::Warn => write!(f, "WARN"),
        }
    }
}

/// A self-diagnostic notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Identifies the component that raised the record
    pub id: u64,
    pub level: StatusLevel,
    /// Short description of where the record was raised
    pub short_stack: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Status {
    pub fn new(
        id: u64,
        level: StatusLevel,
        short_stack: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            level,
            short_stack: short_stack.into(),
            message: message.into(),
            detail: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

static NEXT_STATUS_ID: AtomicU64 = AtomicU64::new(1);

/// Hand out a process-unique status id
pub fn next_status_id() -> u64 {
    NEXT_STATUS_ID.fetch_add(1, Ordering::Relaxed)
}

/// Receives self-diagnostic status records
///
/// Reporting must never block or fail the caller.
///
/// Implementations:
/// - `ConsoleReporter`: writes to stderr
/// - `NoOpReporter`: discards everything
/// - `MemoryReporter`: keeps records for inspection
pub trait StatusReporter: Send + Sync {
    /// Handle a record; `init` is set for initialization-time reports
    fn handle(&self, status: &Status, init: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ids_are_unique() {
        let a = next_status_id();
        let b = next_status_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_builder() {
        let status = Status::new(7, StatusLevel::Warn, "src/main.rs:3", "careful")
            .with_detail("more");
        assert_eq!(status.id, 7);
        assert_eq!(status.level, StatusLevel::Warn);
        assert_eq!(status.detail, "more");
    }

    #[test]
    fn test_status_serialization() {
        let status = Status::new(1, StatusLevel::Init, "lib.rs:1", "package initialized");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["level"], "INIT");
        assert!(json.get("detail").is_none());

        let back: Status = serde_json::from_value(json).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(StatusLevel::Warn.to_string(), "WARN");
        assert_eq!(StatusLevel::Init.to_string(), "INIT");
    }
}
