//! Domain layer for availability refresh messages.

pub mod appointment;
pub mod asset;
pub mod availability;
pub mod commands;
pub mod message;
