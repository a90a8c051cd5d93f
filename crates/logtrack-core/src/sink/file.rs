//! File sink with stdout mirroring

use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use parking_lot::Mutex;

use super::traits::{render, Sink, SinkError, SinkResult};

/// Appends each message to its log file, creating it (and its parent
/// directory) on first use, and optionally echoes it to stdout
///
/// Writes are serialized so lines from concurrent callers never interleave.
#[derive(Debug, Default)]
pub struct FileSink {
    write_lock: Mutex<()>,
}

impl FileSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(path: &Path, line: &str) -> SinkResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

impl Sink for FileSink {
    fn dispatch(&self, path: &Path, to_stdout: bool, values: &[&dyn Display]) -> SinkResult<()> {
        if path.as_os_str().is_empty() {
            return Err(SinkError::InvalidPath(path.to_path_buf()));
        }

        let line = render(values)?;
        let _guard = self.write_lock.lock();

        // Mirror first so a failing file write still leaves the message visible
        if to_stdout {
            let mut stdout = io::stdout().lock();
            stdout.write_all(line.as_bytes())?;
            stdout.flush()?;
        }

        Self::append(path, &line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let sink = FileSink::new();

        sink.dispatch(&path, false, &[&"first"]).unwrap();
        sink.dispatch(&path, false, &[&"second ", &2]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond 2\n");
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("app.log");

        FileSink::new().dispatch(&path, false, &[&"hello"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_mirrors_to_stdout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        // stdout is captured by the test harness; the file still gets the line
        FileSink::new().dispatch(&path, true, &[&"mirrored"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "mirrored\n");
    }

    #[test]
    fn test_rejects_empty_path() {
        let result = FileSink::new().dispatch(Path::new(""), false, &[&"lost"]);
        assert!(matches!(result, Err(SinkError::InvalidPath(_))));
    }

    #[test]
    fn test_reports_io_errors() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened for appending
        let result = FileSink::new().dispatch(dir.path(), false, &[&"lost"]);
        assert!(matches!(result, Err(SinkError::Io(_))));
    }
}
