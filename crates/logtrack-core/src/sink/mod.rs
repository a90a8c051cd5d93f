//! Log sinks

mod traits;
mod file;
mod memory;

pub use traits::{render, Sink, SinkError, SinkResult};
pub use file::FileSink;
pub use memory::{Dispatch, MemorySink};
