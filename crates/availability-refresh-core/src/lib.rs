//! Availability Refresh Core — shared abstractions.
//!
//! This crate defines the event-type enumeration, the message and broker
//! traits, and the error taxonomy that the catalog, the publisher and the
//! broker adapters depend on. It contains no infrastructure code.

pub mod broker;
pub mod clock;
pub mod error;
pub mod event;
