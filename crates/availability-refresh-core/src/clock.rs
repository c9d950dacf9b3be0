//! Clock abstraction so sample timestamps and requested days are reproducible.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Current time as whole Unix seconds, the unit service windows use.
    fn unix_timestamp(&self) -> i64 {
        self.now().timestamp()
    }

    /// Current UTC calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock used by the producer binary.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Frozen(DateTime<Utc>);

    impl Clock for Frozen {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_unix_timestamp_and_today_derive_from_now() {
        let clock = Frozen(Utc.with_ymd_and_hms(2023, 11, 2, 10, 20, 46).unwrap());

        assert_eq!(clock.unix_timestamp(), 1_698_920_446);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2023, 11, 2).unwrap());
    }
}
