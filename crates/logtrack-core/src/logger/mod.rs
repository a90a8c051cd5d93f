//! The verbosity-gated logger
//!
//! Every print re-reads the process-wide verbosity, since any part of the
//! host may change it between calls:
//!
//! 1. the verbosity setting is repaired if needed (see [`fix_verbosity`])
//! 2. messages requested above the current verbosity are dropped
//! 3. at verbosity 3 and up, `"[<caller>] "` is prepended
//! 4. the message goes to the logger's own file, or the default one
//!
//! Printing never fails. Problems are reported to the context's
//! [`StatusReporter`](crate::status::StatusReporter) as warnings.

mod context;
mod init;
mod macros;
mod sanitize;

use std::fmt::{self, Display};
use std::path::PathBuf;
use std::sync::Arc;

pub use context::{global_context, LogContext, LogContextBuilder};
pub use init::{init, init_with};
pub use sanitize::{default_log_file_for, fix_default_log_file, fix_verbosity};

use crate::settings::VERBOSITY_KEY;
use crate::stack::CallSite;
use crate::verbosity::Verbosity;

/// Level used by [`Logger::print`]: messages expected to be seen in
/// ordinary operation
pub const DEFAULT_LEVEL: u8 = 3;

/// Print levels:
///
/// - 5 - low priority messages, only printed at verbosity 5
/// - 4 - ...
/// - 3 - normal priority messages
/// - 2 - messages that print without the caller prefix
/// - 1 - ...
/// - 0 - high priority messages that always print
#[derive(Clone)]
pub struct Logger {
    log_file: String,
    to_stdout: bool,
    ctx: Arc<LogContext>,
}

impl Logger {
    /// Create a logger on the process-wide context
    #[track_caller]
    pub fn new() -> Self {
        Self::with_context(global_context())
    }

    /// Create a logger on `ctx`, repairing its settings
    #[track_caller]
    pub fn with_context(ctx: Arc<LogContext>) -> Self {
        let site = CallSite::caller();
        fix_default_log_file(&ctx, &site);
        fix_verbosity(&ctx, &site);

        Self {
            log_file: String::new(),
            to_stdout: true,
            ctx,
        }
    }

    /// Per-logger log file; empty means the default log file is used
    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn set_log_file(&mut self, path: impl Into<String>) {
        self.log_file = path.into();
    }

    pub fn with_log_file(mut self, path: impl Into<String>) -> Self {
        self.set_log_file(path);
        self
    }

    /// Whether messages are mirrored to stdout
    pub fn to_stdout(&self) -> bool {
        self.to_stdout
    }

    pub fn set_to_stdout(&mut self, to_stdout: bool) {
        self.to_stdout = to_stdout;
    }

    pub fn context(&self) -> &Arc<LogContext> {
        &self.ctx
    }

    /// Current process-wide verbosity, repaired if needed
    #[track_caller]
    pub fn verbosity(&self) -> Verbosity {
        fix_verbosity(&self.ctx, &CallSite::caller())
    }

    /// Change the process-wide verbosity
    #[track_caller]
    pub fn set_verbosity(&self, verbosity: Verbosity) {
        if let Err(err) = self.ctx.settings().set(VERBOSITY_KEY, verbosity.into()) {
            sanitize::warn(
                &self.ctx,
                &CallSite::caller(),
                format!("could not set {} to {}", VERBOSITY_KEY, verbosity),
                err.to_string(),
            );
        }
    }

    /// Print `values` if the current verbosity is at least `level`
    #[track_caller]
    pub fn print_at(&self, level: u8, values: &[&dyn Display]) {
        let site = CallSite::caller();

        let verbosity = fix_verbosity(&self.ctx, &site);
        if !verbosity.allows(level) {
            return;
        }

        let prefix;
        let mut message: Vec<&dyn Display> = Vec::with_capacity(values.len() + 1);
        if verbosity.wants_prefix() {
            prefix = format!("[{}] ", self.ctx.inspector().short_exclude(&site, 1));
            message.push(&prefix);
        }
        message.extend_from_slice(values);

        let path = self.destination(&site);
        if let Err(err) = self.ctx.sink().dispatch(&path, self.to_stdout, &message) {
            sanitize::warn(
                &self.ctx,
                &site,
                format!("failed to write log message: {}", err),
                path.display().to_string(),
            );
        }
    }

    /// Print `values` at [`DEFAULT_LEVEL`]
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        self.print_at(DEFAULT_LEVEL, values);
    }

    fn destination(&self, site: &CallSite) -> PathBuf {
        if self.log_file.is_empty() {
            PathBuf::from(fix_default_log_file(&self.ctx, site))
        } else {
            PathBuf::from(&self.log_file)
        }
    }
}

impl Default for Logger {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_file", &self.log_file)
            .field("to_stdout", &self.to_stdout)
            .finish_non_exhaustive()
    }
}
