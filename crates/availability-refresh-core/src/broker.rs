//! Message broker abstraction.

use std::fmt;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RefreshError;

/// Longest group or deduplication id a FIFO topic accepts.
pub const MAX_FIFO_ID_LEN: usize = 128;

// FIFO ids are 1..=128 ASCII alphanumerics or punctuation.
fn check_fifo_id(kind: &str, value: &str) -> Result<(), RefreshError> {
    if value.trim().is_empty() {
        return Err(RefreshError::Validation(format!("{kind} must not be blank")));
    }
    if value.len() > MAX_FIFO_ID_LEN {
        return Err(RefreshError::Validation(format!(
            "{kind} is {} characters, limit is {MAX_FIFO_ID_LEN}",
            value.len()
        )));
    }
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || c.is_ascii_punctuation()))
    {
        return Err(RefreshError::Validation(format!(
            "{kind} contains invalid character {c:?}"
        )));
    }
    Ok(())
}

/// Broker-level ordering key for FIFO delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageGroupId(String);

impl MessageGroupId {
    /// Wraps a caller-chosen group id.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Validation` if `value` is blank or is not a
    /// valid FIFO id.
    pub fn new(value: impl Into<String>) -> Result<Self, RefreshError> {
        let value = value.into();
        check_fifo_id("message group id", &value)?;
        Ok(Self(value))
    }

    /// Returns the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broker-level idempotency token. Must be unique per logical message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeduplicationId(String);

impl DeduplicationId {
    /// Wraps a caller-supplied idempotency key.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Validation` if `value` is blank or is not a
    /// valid FIFO id.
    pub fn new(value: impl Into<String>) -> Result<Self, RefreshError> {
        let value = value.into();
        check_fifo_id("deduplication id", &value)?;
        Ok(Self(value))
    }

    /// Generates a fresh random key for a message with no natural one.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeduplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a broker needs to deliver one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// Destination topic identifier.
    pub topic_arn: String,
    /// Event-type literal, sent as a wire attribute beside the body.
    pub subject: String,
    /// JSON-encoded message body.
    pub message: String,
    /// FIFO ordering key.
    pub message_group_id: String,
    /// Idempotency token.
    pub deduplication_id: String,
}

/// Acknowledgement returned by the broker.
///
/// A response without a message id is treated as a failed publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokerResponse {
    /// Broker-assigned message identifier.
    pub message_id: Option<String>,
    /// Broker-assigned position within the message group (FIFO topics).
    pub sequence_number: Option<String>,
}

impl BrokerResponse {
    /// Returns the message id if the broker assigned a non-empty one.
    #[must_use]
    pub fn acknowledged_id(&self) -> Option<&str> {
        self.message_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Client for a message broker that accepts one publish at a time.
#[async_trait]
pub trait MessageBroker: Send + Sync {
    /// Sends `request` and returns the broker's acknowledgement.
    async fn publish(&self, request: &PublishRequest) -> Result<BrokerResponse, RefreshError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_group_and_dedup_ids_are_rejected() {
        assert!(matches!(
            MessageGroupId::new("  "),
            Err(RefreshError::Validation(_))
        ));
        assert!(matches!(
            DeduplicationId::new(""),
            Err(RefreshError::Validation(_))
        ));
    }

    #[test]
    fn test_fifo_ids_reject_overlong_values() {
        let too_long = "a".repeat(MAX_FIFO_ID_LEN + 1);

        assert!(matches!(
            MessageGroupId::new(too_long.clone()),
            Err(RefreshError::Validation(_))
        ));
        assert!(matches!(
            DeduplicationId::new(too_long),
            Err(RefreshError::Validation(_))
        ));
        assert!(MessageGroupId::new("a".repeat(MAX_FIFO_ID_LEN)).is_ok());
    }

    #[test]
    fn test_fifo_ids_reject_whitespace_and_non_ascii() {
        for value in ["store 1", "store\t1", "magasin-é"] {
            assert!(matches!(
                MessageGroupId::new(value),
                Err(RefreshError::Validation(_))
            ));
            assert!(matches!(
                DeduplicationId::new(value),
                Err(RefreshError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_fifo_ids_accept_uuids_and_punctuation() {
        let store_id = "3f1c7a52-9d0e-4b7a-8a51-0f3e6c2d9b14";

        assert_eq!(MessageGroupId::new(store_id).unwrap().as_str(), store_id);
        assert!(DeduplicationId::new("order#42:retry_1").is_ok());
    }

    #[test]
    fn test_generated_dedup_ids_are_unique() {
        let first = DeduplicationId::generate();
        let second = DeduplicationId::generate();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn test_acknowledged_id_ignores_missing_or_empty_ids() {
        assert_eq!(BrokerResponse::default().acknowledged_id(), None);

        let empty = BrokerResponse {
            message_id: Some(String::new()),
            sequence_number: None,
        };
        assert_eq!(empty.acknowledged_id(), None);

        let acked = BrokerResponse {
            message_id: Some("m-1".into()),
            sequence_number: Some("10000000000000000001".into()),
        };
        assert_eq!(acked.acknowledged_id(), Some("m-1"));
    }
}
