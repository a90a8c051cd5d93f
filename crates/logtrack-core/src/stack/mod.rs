//! Caller identification

mod traits;
mod location;

pub use traits::{CallSite, StackInspector};
pub use location::{program_name, LocationInspector};
