//! Verbosity scale and clamping policy
//!
//! Verbosity runs from 0 to 5:
//!
//! - 5 - log everything
//! - 4 - log everything other than level 5 messages
//! - 3 - default, log messages that are expected to be seen
//! - 2 - do not prefix messages with the caller
//! - 1 - only log level 0 and level 1 messages
//! - 0 - only log level 0 messages

use std::fmt;

use serde_json::Value;

/// A verbosity level guaranteed to be within `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verbosity(u8);

/// Where a raw value sat relative to the valid range before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    InRange,
    BelowMin,
    AboveMax,
}

impl Verbosity {
    pub const MIN: Verbosity = Verbosity(0);
    pub const MAX: Verbosity = Verbosity(5);
    pub const DEFAULT: Verbosity = Verbosity(3);

    /// Verbosity at or above which messages are prefixed with the caller
    pub const PREFIX_THRESHOLD: Verbosity = Verbosity(3);

    /// Create a verbosity level, returning `None` when out of range
    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX.0).then_some(Self(level))
    }

    /// Clamp an arbitrary integer into range
    pub fn clamped(raw: i64) -> (Self, Clamp) {
        if raw < i64::from(Self::MIN.0) {
            (Self::MIN, Clamp::BelowMin)
        } else if raw > i64::from(Self::MAX.0) {
            (Self::MAX, Clamp::AboveMax)
        } else {
            (Self(raw as u8), Clamp::InRange)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The gate: a message requested at `level` passes iff `self >= level`
    pub fn allows(self, level: u8) -> bool {
        self.0 >= level
    }

    /// Whether messages that pass the gate carry a caller prefix
    pub fn wants_prefix(self) -> bool {
        self >= Self::PREFIX_THRESHOLD
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Verbosity> for Value {
    fn from(v: Verbosity) -> Self {
        Value::from(v.0)
    }
}

/// A numeric settings value reduced to an integer
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NumericLevel {
    pub whole: i64,
    /// The stored value was not already an integer (e.g. `2.5` or `3.0`)
    pub was_float: bool,
    /// The stored value had a non-zero fractional part
    pub had_fraction: bool,
}

/// Interpret a settings value as a level, flooring fractions
///
/// Returns `None` for non-numeric values.
pub(crate) fn numeric_level(value: &Value) -> Option<NumericLevel> {
    let Value::Number(n) = value else {
        return None;
    };

    if let Some(i) = n.as_i64() {
        return Some(NumericLevel { whole: i, was_float: false, had_fraction: false });
    }
    if n.as_u64().is_some() {
        return Some(NumericLevel { whole: i64::MAX, was_float: false, had_fraction: false });
    }

    let f = n.as_f64()?;
    let floored = f.floor();
    Some(NumericLevel {
        // float -> int casts saturate
        whole: floored as i64,
        was_float: true,
        had_fraction: floored != f,
    })
}
