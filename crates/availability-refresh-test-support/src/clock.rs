//! Pinned clock for sample-building tests.

use availability_refresh_core::clock::Clock;
use chrono::{DateTime, Utc};

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock `seconds` after the Unix epoch.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is outside chrono's representable range.
    #[must_use]
    pub fn at_unix(seconds: i64) -> Self {
        Self(DateTime::from_timestamp(seconds, 0).expect("timestamp out of range"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
