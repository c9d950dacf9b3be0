//! Amazon SNS implementation of the availability refresh `MessageBroker`.

pub mod config;
pub mod sns_broker;

pub use config::{SnsConfig, SnsConfigError};
pub use sns_broker::SnsBroker;
