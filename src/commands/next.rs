//! `alma next` command.

use crate::context::ServiceContext;
use crate::records::RecordKind;
use crate::store::RecordStore;

/// Execute the `next` command.
///
/// Prints the id the next record of `kind` would receive today without
/// creating anything.
///
/// # Errors
///
/// Returns an error string if the store cannot be read.
pub fn run(ctx: &ServiceContext, kind: RecordKind) -> Result<(), String> {
    println!("{}", next_id(ctx, kind)?);
    Ok(())
}

fn next_id(ctx: &ServiceContext, kind: RecordKind) -> Result<String, String> {
    let store = RecordStore::new(ctx);
    let today = ctx.clock.today();
    Ok(match kind {
        RecordKind::Request => store.load_requests()?.next_id(kind.prefix(), today),
        RecordKind::Loss => store.load_losses()?.next_id(kind.prefix(), today),
    })
}
