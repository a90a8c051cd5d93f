//! In-memory status reporter

use parking_lot::Mutex;

use super::traits::{Status, StatusLevel, StatusReporter};

/// A status record together with its init flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reported {
    pub status: Status,
    pub init: bool,
}

/// Keeps every record it receives, in order
#[derive(Debug, Default)]
pub struct MemoryReporter {
    records: Mutex<Vec<Reported>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records received so far
    pub fn records(&self) -> Vec<Reported> {
        self.records.lock().clone()
    }

    /// Records at the given level
    pub fn at_level(&self, level: StatusLevel) -> Vec<Status> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.status.level == level)
            .map(|r| r.status.clone())
            .collect()
    }

    /// Warning records received so far
    pub fn warnings(&self) -> Vec<Status> {
        self.at_level(StatusLevel::Warn)
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl StatusReporter for MemoryReporter {
    fn handle(&self, status: &Status, init: bool) {
        self.records.lock().push(Reported {
            status: status.clone(),
            init,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_records() {
        let reporter = MemoryReporter::new();
        assert!(reporter.is_empty());

        reporter.handle(&Status::new(1, StatusLevel::Init, "a", "started"), true);
        reporter.handle(&Status::new(1, StatusLevel::Warn, "b", "careful"), false);

        assert_eq!(reporter.len(), 2);
        let records = reporter.records();
        assert!(records[0].init);
        assert!(!records[1].init);

        let warnings = reporter.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "careful");
        assert_eq!(reporter.at_level(StatusLevel::Init).len(), 1);

        reporter.clear();
        assert!(reporter.is_empty());
    }
}
