//! Application layer for availability refresh messages.

pub mod publisher;
