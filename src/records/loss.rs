//! Loss reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::HasIdentifier;

/// A report of stock that was lost, broken or otherwise written off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossRecord {
    /// Daily identifier, e.g. `LOSS-001-01012024`.
    pub id: String,
    /// Affected item.
    pub item: String,
    /// Number of units lost.
    pub quantity: u32,
    /// What happened.
    pub reason: String,
    /// Who filed the report.
    pub reported_by: String,
    /// When the report was filed.
    pub created_at: DateTime<Utc>,
}

impl HasIdentifier for LossRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
