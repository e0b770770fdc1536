//! `alma request` command.

use crate::context::ServiceContext;
use crate::records::{InventoryRequest, RecordKind, RequestStatus};
use crate::store::RecordStore;

/// Execute the `request` command.
///
/// Creates a pending inventory request under today's next `REQ` id, saves it
/// and prints the id.
///
/// # Errors
///
/// Returns an error string if the store cannot be read or written.
pub fn run(
    ctx: &ServiceContext,
    item: &str,
    quantity: u32,
    requester: &str,
    notes: Option<&str>,
) -> Result<(), String> {
    let store = RecordStore::new(ctx);
    let mut repo = store.load_requests()?;
    let created_at = ctx.clock.now();
    let id = repo
        .create_with(RecordKind::Request.prefix(), ctx.clock.today(), |id| InventoryRequest {
            id,
            item: item.to_string(),
            quantity,
            requester: requester.to_string(),
            status: RequestStatus::Pending,
            created_at,
            notes: notes.map(str::to_string),
        })?
        .id
        .clone();
    store.save_requests(&repo)?;
    println!("{id}");
    Ok(())
}
