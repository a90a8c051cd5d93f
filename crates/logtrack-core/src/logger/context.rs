//! Collaborators shared by every logger

use std::fmt;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

use crate::settings::{MemorySettingsStore, SettingsStore};
use crate::sink::{FileSink, Sink};
use crate::stack::{LocationInspector, StackInspector};
use crate::status::{next_status_id, ConsoleReporter, StatusReporter};

/// The settings store, stack inspector, status reporter and sink a logger
/// works against
///
/// Loggers hold the context behind an `Arc`; every logger built from the
/// same context shares its settings.
pub struct LogContext {
    settings: Arc<dyn SettingsStore>,
    inspector: Arc<dyn StackInspector>,
    reporter: Arc<dyn StatusReporter>,
    sink: Arc<dyn Sink>,
    status_id: u64,
    pub(crate) initialized: OnceCell<()>,
}

impl LogContext {
    /// Start building a context; unset collaborators get the defaults
    pub fn builder() -> LogContextBuilder {
        LogContextBuilder::default()
    }

    pub fn settings(&self) -> &Arc<dyn SettingsStore> {
        &self.settings
    }

    pub fn inspector(&self) -> &Arc<dyn StackInspector> {
        &self.inspector
    }

    pub fn reporter(&self) -> &Arc<dyn StatusReporter> {
        &self.reporter
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Id carried by every status record this context raises
    pub fn status_id(&self) -> u64 {
        self.status_id
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("settings", &self.settings.name())
            .field("status_id", &self.status_id)
            .finish_non_exhaustive()
    }
}

/// Builder for [`LogContext`]
#[derive(Default)]
pub struct LogContextBuilder {
    settings: Option<Arc<dyn SettingsStore>>,
    inspector: Option<Arc<dyn StackInspector>>,
    reporter: Option<Arc<dyn StatusReporter>>,
    sink: Option<Arc<dyn Sink>>,
}

impl LogContextBuilder {
    /// Defaults to `MemorySettingsStore::from_env()`
    pub fn settings(mut self, settings: Arc<dyn SettingsStore>) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Defaults to `LocationInspector`
    pub fn inspector(mut self, inspector: Arc<dyn StackInspector>) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// Defaults to `ConsoleReporter`
    pub fn reporter(mut self, reporter: Arc<dyn StatusReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Defaults to `FileSink`
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> LogContext {
        LogContext {
            settings: self
                .settings
                .unwrap_or_else(|| Arc::new(MemorySettingsStore::from_env())),
            inspector: self.inspector.unwrap_or_else(|| Arc::new(LocationInspector)),
            reporter: self.reporter.unwrap_or_else(|| Arc::new(ConsoleReporter::new())),
            sink: self.sink.unwrap_or_else(|| Arc::new(FileSink::new())),
            status_id: next_status_id(),
            initialized: OnceCell::new(),
        }
    }
}

/// Process-wide context used by `Logger::new()`
static GLOBAL_CONTEXT: Lazy<Arc<LogContext>> = Lazy::new(|| Arc::new(LogContext::default()));

/// Get the process-wide context
pub fn global_context() -> Arc<LogContext> {
    Arc::clone(&GLOBAL_CONTEXT)
}
