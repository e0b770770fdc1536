//! Command dispatch and handlers.

pub mod generate;
pub mod list;
pub mod loss;
pub mod next;
pub mod request;
pub mod status;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    log::debug!("dispatching {command:?}");
    match command {
        Command::Next { kind } => next::run(ctx, *kind),
        Command::Generate { prefix, existing } => generate::run(ctx, prefix, existing),
        Command::Request { item, quantity, requester, notes } => {
            request::run(ctx, item, *quantity, requester, notes.as_deref())
        }
        Command::Loss { item, quantity, reason, reported_by } => {
            loss::run(ctx, item, *quantity, reason, reported_by)
        }
        Command::List { kind, json } => list::run(ctx, *kind, *json),
        Command::Status { id, status } => status::run(ctx, id, *status),
    }
}

/// Context over a fresh store directory, pinned to 2024-01-01.
#[cfg(test)]
pub(crate) fn test_context(name: &str) -> ServiceContext {
    use chrono::NaiveDate;

    use crate::adapters::FixedClock;

    let root = std::env::temp_dir().join(format!("alma_cmd_{name}"));
    let _ = std::fs::remove_dir_all(&root);
    let mut ctx = ServiceContext::live(root);
    ctx.clock = Box::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    ctx
}
