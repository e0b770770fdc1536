//! Daily sequential identifiers.
//!
//! Identifiers take the form `{PREFIX}-{NNN}-{DDMMYYYY}`: a category tag, a
//! zero-padded counter that restarts every calendar day, and the day itself.
//! The counter for a new identifier is derived from the records already held
//! by the caller, so generation is pure and needs no state of its own.

pub mod daily;
pub mod prefix;

pub use daily::{count_for_day, date_segment, generate_daily_id, DailyId, DATE_SEGMENT_FORMAT};
pub use prefix::Prefix;

/// Anything that exposes an opaque string identifier.
pub trait HasIdentifier {
    /// Returns the record's identifier.
    fn id(&self) -> &str;
}

impl HasIdentifier for String {
    fn id(&self) -> &str {
        self
    }
}

impl HasIdentifier for str {
    fn id(&self) -> &str {
        self
    }
}

impl<T: HasIdentifier + ?Sized> HasIdentifier for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}
