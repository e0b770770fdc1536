//! Clock port for obtaining the current time and calendar day.

use chrono::{DateTime, NaiveDate, Utc};

/// Provides the current time.
///
/// Identifiers are scoped to a calendar day, so the clock is the only thing
/// that decides which day's sequence a new record joins. Tests pin it with
/// [`crate::adapters::FixedClock`].
pub trait Clock: Send + Sync {
    /// Returns the current UTC time, used for record timestamps.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current local calendar day, used for identifier dates.
    fn today(&self) -> NaiveDate;
}
