//! Call-site capture and the stack inspector trait

use std::fmt;
use std::panic::Location;

/// Source location of the code that called into the logger
///
/// Captured with `#[track_caller]`, so frames inside this crate never show
/// up: the location is always the first frame outside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Capture the location of the caller
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    pub fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Derives short caller descriptions from a call site
///
/// Implementations:
/// - `LocationInspector`: `file:line` from the captured location
pub trait StackInspector: Send + Sync {
    /// Short description of the caller
    fn short(&self, site: &CallSite) -> String;

    /// Short description of the caller, skipping `skip` innermost frames
    ///
    /// The call site already excludes the logger's own frames. Inspectors
    /// that walk a real backtrace may use `skip` to drop more.
    fn short_exclude(&self, site: &CallSite, skip: usize) -> String {
        let _ = skip;
        self.short(site)
    }

    /// Name identifying the program as a whole, without extension
    ///
    /// Must not depend on which module of the program is calling, so that
    /// every caller converges on one default log file. `site` is a fallback.
    fn last_file(&self, site: &CallSite) -> String;
}
