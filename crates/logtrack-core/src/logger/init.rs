//! One-time "package initialized" notification

use super::context::{global_context, LogContext};
use crate::stack::CallSite;
use crate::status::{Status, StatusLevel};

/// Announce initialization to the process-wide context's reporter
///
/// Call once from the composition root. Repeated calls do nothing.
#[track_caller]
pub fn init() {
    init_with(&global_context());
}

/// Announce initialization to `ctx`'s reporter, once per context
///
/// Returns `true` if this call emitted the record.
#[track_caller]
pub fn init_with(ctx: &LogContext) -> bool {
    let site = CallSite::caller();
    let mut emitted = false;

    ctx.initialized.get_or_init(|| {
        let status = Status::new(
            ctx.status_id(),
            StatusLevel::Init,
            ctx.inspector().short(&site),
            "package initialized",
        );
        ctx.reporter().handle(&status, true);
        emitted = true;
    });

    emitted
}
