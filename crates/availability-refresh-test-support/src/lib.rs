//! Shared test brokers and clocks for availability refresh crates.

mod broker;
mod clock;

pub use broker::{EmptyResponseBroker, FailingBroker, RecordingBroker};
pub use clock::FixedClock;
