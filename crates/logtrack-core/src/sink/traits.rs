//! Sink trait definition

use std::fmt::{self, Display, Write as _};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while dispatching a message
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("failed to render message: {0}")]
    Render(#[from] fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Writes dispatched messages to a log file and optionally stdout
///
/// Implementations:
/// - `FileSink`: appends to the file, mirrors to stdout
/// - `MemorySink`: keeps dispatches for inspection
pub trait Sink: Send + Sync {
    /// Render `values` in order and append them to `path`
    fn dispatch(&self, path: &Path, to_stdout: bool, values: &[&dyn Display]) -> SinkResult<()>;
}

/// Render values into one line
///
/// Values are concatenated without separators and terminated by a newline.
pub fn render(values: &[&dyn Display]) -> SinkResult<String> {
    let mut line = String::new();
    for value in values {
        write!(line, "{}", value)?;
    }
    line.push('\n');
    Ok(line)
}
