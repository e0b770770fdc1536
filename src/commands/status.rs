//! `alma status` command.

use crate::context::ServiceContext;
use crate::records::RequestStatus;
use crate::store::RecordStore;

/// Execute the `status` command.
///
/// Moves the request `id` to `status` and saves the store.
///
/// # Errors
///
/// Returns an error string if the request does not exist, the lifecycle
/// refuses the move, or the store cannot be read or written.
pub fn run(ctx: &ServiceContext, id: &str, status: RequestStatus) -> Result<(), String> {
    let store = RecordStore::new(ctx);
    let mut repo = store.load_requests()?;
    let request = repo.get_mut(id).ok_or_else(|| format!("No request with id {id}"))?;
    let previous = request.status;
    request.transition(status)?;
    store.save_requests(&repo)?;
    log::info!("{id}: {previous} -> {status}");
    println!("{id}: {previous} -> {status}");
    Ok(())
}
