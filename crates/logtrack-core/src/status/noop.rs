//! No-op status reporter

use super::traits::{Status, StatusReporter};

/// A reporter that does nothing
///
/// Useful when self-diagnostics are not wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl StatusReporter for NoOpReporter {
    fn handle(&self, _status: &Status, _init: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusLevel;

    #[test]
    fn test_noop_reporter_discards() {
        let reporter = NoOpReporter::new();
        reporter.handle(&Status::new(1, StatusLevel::Init, "", "initialized"), true);
        reporter.handle(&Status::new(1, StatusLevel::Warn, "main.rs:3", "dropped").with_detail("x"), false);
    }
}
