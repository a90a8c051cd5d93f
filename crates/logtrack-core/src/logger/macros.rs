//! Convenience macros for formatted messages
//!
//! The call site recorded for the prefix is the macro invocation.

/// Format a message and print it at the given level
///
/// ```no_run
/// # use logtrack_core::{log_at, Logger};
/// # let logger = Logger::new();
/// log_at!(logger, 4, "retrying {} in {}ms", "upload", 250);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.print_at($level, &[&::std::format!($($arg)*)])
    };
}

/// Format a message and print it at the default level
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print(&[&::std::format!($($arg)*)])
    };
}
