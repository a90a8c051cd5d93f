//! Settings store abstractions
//!
//! Supports multiple settings sources:
//! - `MemorySettingsStore`: In-memory, optionally seeded from `LOGTRACK_*` env vars
//! - `FileSettingsStore`: YAML file-based

mod traits;
mod memory;
mod file;
mod env;

pub use traits::{kind_name, same_kind, SettingsError, SettingsResult, SettingsStore};
pub use memory::MemorySettingsStore;
pub use file::{FileSettingsStore, SettingsFile};
pub use env::{seed_from_env, seed_from_vars, setting_for_env_var};

/// Key of the process-wide verbosity level (integer 0-5)
pub const VERBOSITY_KEY: &str = "logtrack_verbosity_level";

/// Key of the process-wide default log file path
pub const DEFAULT_LOG_FILE_KEY: &str = "logtrack_default_log_file";
