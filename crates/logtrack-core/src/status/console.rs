//! Console status reporter

use super::traits::{Status, StatusReporter};

/// A reporter that writes status records to stderr
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    prefix: String,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// Create a new console reporter with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[logtrack]".to_string(),
        }
    }

    /// Create a console reporter with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn format(&self, status: &Status) -> String {
        let mut line = format!(
            "{} {}: [{}] {}",
            self.prefix, status.level, status.short_stack, status.message
        );
        if !status.detail.is_empty() {
            line.push_str(" (");
            line.push_str(&status.detail);
            line.push(')');
        }
        line
    }
}

impl StatusReporter for ConsoleReporter {
    fn handle(&self, status: &Status, _init: bool) {
        eprintln!("{}", self.format(status));
    }
}
