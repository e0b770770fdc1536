//! Live clock using the system clock.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::ports::clock::Clock;

/// Live clock that returns the real current time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_current_time() {
        let clock = LiveClock;
        let before = Utc::now();
        let now = clock.now();
        let after = Utc::now();

        assert!(now >= before);
        assert!(now <= after);
    }

    #[test]
    fn today_is_the_local_date() {
        let before = Local::now().date_naive();
        let today = LiveClock.today();
        let after = Local::now().date_naive();

        assert!(today >= before);
        assert!(today <= after);
    }
}
