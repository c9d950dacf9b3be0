//! Error taxonomy shared by the catalog, the publisher and broker adapters.

use thiserror::Error;

/// Top-level error type for building and publishing refresh messages.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// A record could not be built from its wire form.
    #[error("construction error: {0}")]
    Construction(String),

    /// A record or publish argument broke a precondition.
    #[error("validation error: {0}")]
    Validation(String),

    /// A record could not be rendered to its JSON body.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The broker rejected the publish or returned no acknowledgement.
    #[error("broker error publishing {subject} (group {message_group_id}): {detail}")]
    Broker {
        /// The subject attribute of the failed publish.
        subject: String,
        /// The message group id of the failed publish.
        message_group_id: String,
        /// Error detail reported by the broker client.
        detail: String,
    },
}

impl RefreshError {
    /// Returns `true` for failures that happened at the broker, after the
    /// record was successfully validated and serialized.
    #[must_use]
    pub fn is_broker(&self) -> bool {
        matches!(self, Self::Broker { .. })
    }
}
