//! Clock pinned to a single calendar day.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::ports::clock::Clock;

/// Clock that always reports the same day.
///
/// Timestamps fall at midnight UTC of that day.
pub struct FixedClock {
    day: NaiveDate,
}

impl FixedClock {
    /// Creates a clock pinned to `day`.
    #[must_use]
    pub fn new(day: NaiveDate) -> Self {
        Self { day }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.day.and_time(NaiveTime::MIN).and_utc()
    }

    fn today(&self) -> NaiveDate {
        self.day
    }
}
