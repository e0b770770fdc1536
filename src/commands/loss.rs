//! `alma loss` command.

use crate::context::ServiceContext;
use crate::records::{LossRecord, RecordKind};
use crate::store::RecordStore;

/// Execute the `loss` command.
///
/// Files a loss report under today's next `LOSS` id, saves it and prints
/// the id.
///
/// # Errors
///
/// Returns an error string if the store cannot be read or written.
pub fn run(
    ctx: &ServiceContext,
    item: &str,
    quantity: u32,
    reason: &str,
    reported_by: &str,
) -> Result<(), String> {
    let store = RecordStore::new(ctx);
    let mut repo = store.load_losses()?;
    let created_at = ctx.clock.now();
    let id = repo
        .create_with(RecordKind::Loss.prefix(), ctx.clock.today(), |id| LossRecord {
            id,
            item: item.to_string(),
            quantity,
            reason: reason.to_string(),
            reported_by: reported_by.to_string(),
            created_at,
        })?
        .id
        .clone();
    store.save_losses(&repo)?;
    println!("{id}");
    Ok(())
}
