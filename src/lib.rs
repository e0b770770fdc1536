//! Core library entry for the `alma` CLI.
//!
//! Records (inventory requests, loss reports) carry daily sequential ids of
//! the form `{PREFIX}-{NNN}-{DDMMYYYY}`; see [`ids`].

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod ids;
pub mod ports;
pub mod records;
pub mod repository;
pub mod store;

use clap::Parser;

use crate::config::Config;
use crate::context::ServiceContext;

/// Run the CLI with the provided arguments.
///
/// Configuration is read from the process environment.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let config = Config::from_env()?;
    let ctx = ServiceContext::from_config(&config);
    commands::dispatch(&cli.command, &ctx)
}
