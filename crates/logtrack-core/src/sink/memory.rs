//! In-memory sink

use std::fmt::Display;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::{Sink, SinkResult};

/// One dispatched message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub path: PathBuf,
    pub to_stdout: bool,
    /// Each value rendered on its own, in dispatch order
    pub values: Vec<String>,
}

impl Dispatch {
    /// The message as the file sink would write it, minus the newline
    pub fn line(&self) -> String {
        self.values.concat()
    }
}

/// A sink that keeps every dispatch in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    dispatches: Mutex<Vec<Dispatch>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatches(&self) -> Vec<Dispatch> {
        self.dispatches.lock().clone()
    }

    pub fn last(&self) -> Option<Dispatch> {
        self.dispatches.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.dispatches.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.dispatches.lock().clear();
    }
}

impl Sink for MemorySink {
    fn dispatch(&self, path: &Path, to_stdout: bool, values: &[&dyn Display]) -> SinkResult<()> {
        self.dispatches.lock().push(Dispatch {
            path: path.to_path_buf(),
            to_stdout,
            values: values.iter().map(|v| v.to_string()).collect(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.dispatch(Path::new("a.log"), true, &[&"x = ", &1]).unwrap();

        let last = sink.last().unwrap();
        assert_eq!(last.path, PathBuf::from("a.log"));
        assert!(last.to_stdout);
        assert_eq!(last.values, vec!["x = ", "1"]);
        assert_eq!(last.line(), "x = 1");

        sink.clear();
        assert_eq!(sink.len(), 0);
    }
}
