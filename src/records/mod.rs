//! Record types that carry daily identifiers.

pub mod loss;
pub mod request;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use loss::LossRecord;
pub use request::{InventoryRequest, RequestStatus};

/// Categories of record, each with its own identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Inventory requests raised by staff.
    Request,
    /// Reports of lost or damaged stock.
    Loss,
}

impl RecordKind {
    /// Identifier prefix for this kind.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Request => "REQ",
            Self::Loss => "LOSS",
        }
    }

    /// File the store keeps this kind's records in.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Request => "requests.yaml",
            Self::Loss => "losses.yaml",
        }
    }
}
