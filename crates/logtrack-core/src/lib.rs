//! logtrack Core
//!
//! A verbosity-gated message logger. Each print call is checked against a
//! process-wide verbosity (0-5); messages that pass are optionally prefixed
//! with their caller and appended to a log file, mirrored to stdout.
//!
//! The logger works against four collaborators, each behind a trait:
//! - `settings`: where the verbosity and default log file live
//! - `stack`: how callers are described
//! - `status`: where self-diagnostics go
//! - `sink`: where messages are written
//!
//! ```rust,no_run
//! use logtrack_core::Logger;
//!
//! logtrack_core::init();
//!
//! let logger = Logger::new();
//! logger.print(&[&"listening on port ", &8080]);
//! logger.print_at(5, &[&"only at full verbosity"]);
//! ```

pub mod verbosity;
pub mod settings;
pub mod stack;
pub mod status;
pub mod sink;
pub mod logger;

// Re-export commonly used types
pub use verbosity::Verbosity;

pub use settings::{
    SettingsStore, SettingsError, SettingsResult,
    MemorySettingsStore, FileSettingsStore,
    VERBOSITY_KEY, DEFAULT_LOG_FILE_KEY,
};

pub use stack::{CallSite, StackInspector, LocationInspector};

pub use status::{
    Status, StatusLevel, StatusReporter,
    ConsoleReporter, NoOpReporter, MemoryReporter,
};

pub use sink::{Sink, SinkError, SinkResult, FileSink, MemorySink};

pub use logger::{
    Logger, LogContext, LogContextBuilder, DEFAULT_LEVEL,
    global_context, init, init_with,
};
