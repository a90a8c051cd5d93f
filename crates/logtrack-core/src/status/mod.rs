//! Self-diagnostic status reporting

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{next_status_id, Status, StatusLevel, StatusReporter};
pub use noop::NoOpReporter;
pub use console::ConsoleReporter;
pub use memory::{MemoryReporter, Reported};
