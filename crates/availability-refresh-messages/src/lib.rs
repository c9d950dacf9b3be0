//! Availability Refresh — message catalog and publisher.
//!
//! The domain module defines the closed set of messages that drive
//! availability recalculation. The application module turns one message into
//! a wire envelope and hands it to a broker.

pub mod application;
pub mod domain;
