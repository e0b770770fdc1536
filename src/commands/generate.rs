//! `alma generate` command.

use crate::context::ServiceContext;
use crate::ids::{generate_daily_id, Prefix};

/// Execute the `generate` command.
///
/// Prints the next daily id for `prefix`, counting only the `existing` ids
/// given on the command line. Nothing is read from or written to the store.
///
/// # Errors
///
/// Never fails; the signature matches the other commands.
pub fn run(ctx: &ServiceContext, prefix: &Prefix, existing: &[String]) -> Result<(), String> {
    println!("{}", generate_daily_id(prefix.as_str(), existing, ctx.clock.today()));
    Ok(())
}
