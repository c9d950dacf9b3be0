//! Shared test helpers for producer integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use availability_refresh_core::broker::MessageBroker;
use availability_refresh_messages::application::publisher::Publisher;
use availability_refresh_test_support::FixedClock;

/// FIFO topic used across all integration tests.
pub const TOPIC_ARN: &str = "arn:aws:sns:us-west-2:123456789012:availability-update-test.fifo";

/// Fixed instant used across all integration tests (2023-11-02T10:20:46Z).
pub fn fixed_clock() -> FixedClock {
    FixedClock::at_unix(1_698_920_446)
}

/// Build a publisher for `TOPIC_ARN` on top of `broker`.
pub fn publisher(broker: Arc<dyn MessageBroker>) -> Publisher {
    Publisher::new(broker, TOPIC_ARN)
}
