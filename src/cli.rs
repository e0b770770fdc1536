//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::ids::Prefix;
use crate::records::{RecordKind, RequestStatus};

/// Top-level CLI parser for `alma`.
#[derive(Debug, Parser)]
#[command(name = "alma", version, about = "Issue daily record ids and track requests and losses")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the id the next record of a kind would receive today.
    Next {
        /// Record kind.
        #[arg(value_enum)]
        kind: RecordKind,
    },
    /// Generate a daily id for any prefix against a list of existing ids.
    Generate {
        /// Category tag, e.g. `REQ`.
        prefix: Prefix,
        /// Ids already issued; malformed ones are ignored.
        existing: Vec<String>,
    },
    /// Raise a new inventory request.
    Request {
        /// Item being requested.
        #[arg(long)]
        item: String,
        /// Number of units.
        #[arg(long)]
        quantity: u32,
        /// Who is asking.
        #[arg(long)]
        requester: String,
        /// Optional remarks.
        #[arg(long)]
        notes: Option<String>,
    },
    /// Report lost or damaged stock.
    Loss {
        /// Affected item.
        #[arg(long)]
        item: String,
        /// Number of units lost.
        #[arg(long)]
        quantity: u32,
        /// What happened.
        #[arg(long)]
        reason: String,
        /// Who is reporting.
        #[arg(long)]
        reported_by: String,
    },
    /// List stored records of a kind.
    List {
        /// Record kind.
        #[arg(value_enum)]
        kind: RecordKind,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Move an inventory request to a new status.
    Status {
        /// Request id, e.g. `REQ-001-01012024`.
        id: String,
        /// Target status.
        #[arg(value_enum)]
        status: RequestStatus,
    },
}
