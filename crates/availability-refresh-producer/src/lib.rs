//! Availability refresh producer — builds sample messages and publishes them.

pub mod config;
pub mod error;
pub mod harness;
pub mod samples;
