//! Repair of the two process-wide settings the logger depends on
//!
//! Both policies run before every print. They never fail: whatever the store
//! holds, they hand back a usable value and report what they had to fix.

use serde_json::Value;

use super::context::LogContext;
use crate::settings::{SettingsError, DEFAULT_LOG_FILE_KEY, VERBOSITY_KEY};
use crate::stack::CallSite;
use crate::status::{Status, StatusLevel};
use crate::verbosity::{numeric_level, Clamp, Verbosity};

/// Report a non-fatal problem found while handling a call from `site`
pub(crate) fn warn(ctx: &LogContext, site: &CallSite, message: String, detail: String) {
    let status = Status::new(
        ctx.status_id(),
        StatusLevel::Warn,
        ctx.inspector().short(site),
        message,
    )
    .with_detail(detail);
    ctx.reporter().handle(&status, false);
}

/// Default log file name, `logtrack_<program>.log`
///
/// `site` is only consulted when the inspector cannot name the program.
pub fn default_log_file_for(ctx: &LogContext, site: &CallSite) -> String {
    format!("logtrack_{}.log", ctx.inspector().last_file(site))
}

/// Make sure the default log file setting holds a string, returning it
///
/// An absent or non-string setting is replaced by [`default_log_file_for`].
pub fn fix_default_log_file(ctx: &LogContext, site: &CallSite) -> String {
    let fallback = default_log_file_for(ctx, site);

    match ctx
        .settings()
        .force_type(DEFAULT_LOG_FILE_KEY, Value::String(fallback.clone()))
    {
        Ok(Value::String(path)) => path,
        Ok(_) => fallback,
        Err(err @ (SettingsError::Missing(_) | SettingsError::TypeMismatch { .. })) => {
            warn(
                ctx,
                site,
                format!("log_file was set to the default: {}", fallback),
                err.to_string(),
            );
            fallback
        }
        Err(err) => {
            warn(
                ctx,
                site,
                format!("could not store log_file, using the default: {}", fallback),
                err.to_string(),
            );
            fallback
        }
    }
}

/// Make sure the verbosity setting holds an integer in range, returning it
///
/// - absent or non-numeric: reset to 3
/// - below 0 or above 5: clamped
/// - fractional: floored
///
/// At most one warning is reported per call.
pub fn fix_verbosity(ctx: &LogContext, site: &CallSite) -> Verbosity {
    let settings = ctx.settings();

    let raw = match settings.force_type(VERBOSITY_KEY, Value::from(Verbosity::DEFAULT)) {
        Ok(raw) => raw,
        Err(err @ (SettingsError::Missing(_) | SettingsError::TypeMismatch { .. })) => {
            warn(
                ctx,
                site,
                format!(
                    "{} was set to the default value {}. {}",
                    VERBOSITY_KEY,
                    Verbosity::DEFAULT,
                    err
                ),
                String::new(),
            );
            return Verbosity::DEFAULT;
        }
        Err(err) => {
            warn(
                ctx,
                site,
                format!(
                    "could not store {}, using the default value {}",
                    VERBOSITY_KEY,
                    Verbosity::DEFAULT
                ),
                err.to_string(),
            );
            return Verbosity::DEFAULT;
        }
    };

    // force_type only hands back values of the default's type
    let Some(level) = numeric_level(&raw) else {
        return Verbosity::DEFAULT;
    };

    let (verbosity, clamp) = Verbosity::clamped(level.whole);
    let mut message = match clamp {
        Clamp::BelowMin | Clamp::AboveMax => Some(format!(
            "{} is out of range, defaulting to {}",
            VERBOSITY_KEY, verbosity
        )),
        Clamp::InRange if level.had_fraction => Some(format!(
            "{} is not a whole number, using {}",
            VERBOSITY_KEY, verbosity
        )),
        Clamp::InRange => None,
    };
    let mut detail = format!("was {}", raw);

    if clamp != Clamp::InRange || level.was_float {
        if let Err(err) = settings.set(VERBOSITY_KEY, Value::from(verbosity)) {
            message.get_or_insert_with(|| format!("could not normalize {}", VERBOSITY_KEY));
            detail.push_str(&format!("; could not store: {}", err));
        }
    }

    if let Some(message) = message {
        warn(ctx, site, message, detail);
    }
    verbosity
}
