//! Publishing of refresh messages.
//!
//! One call is one send attempt: the record is checked, serialized, handed to
//! the broker, and the broker's acknowledgement or failure is returned to the
//! caller. Nothing is retried or queued here.

use std::fmt;
use std::sync::Arc;

use availability_refresh_core::broker::{
    BrokerResponse, DeduplicationId, MessageBroker, MessageGroupId, PublishRequest,
};
use availability_refresh_core::error::RefreshError;
use availability_refresh_core::event::{RefreshAvailabilityEvent, RefreshMessage};

use crate::domain::commands::PublishMessage;
use crate::domain::message::AvailabilityRefreshMessage;

/// Acknowledgement of a successfully published message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Broker-assigned message identifier.
    pub message_id: String,
    /// Broker-assigned sequence number, for FIFO topics.
    pub sequence_number: Option<String>,
    /// The subject the message was published under.
    pub subject: RefreshAvailabilityEvent,
    /// The group the message was published into.
    pub message_group_id: String,
}

/// Publishes to one topic through an injected broker handle.
///
/// The handle is created once by the caller and shared read-only across
/// sequential publishes.
#[derive(Clone)]
pub struct Publisher {
    broker: Arc<dyn MessageBroker>,
    topic_arn: String,
}

impl fmt::Debug for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("topic_arn", &self.topic_arn)
            .finish_non_exhaustive()
    }
}

impl Publisher {
    /// Creates a publisher for `topic_arn`.
    #[must_use]
    pub fn new(broker: Arc<dyn MessageBroker>, topic_arn: impl Into<String>) -> Self {
        Self {
            broker,
            topic_arn: topic_arn.into(),
        }
    }

    /// Returns the destination topic.
    #[must_use]
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }

    /// Publishes `record` under `subject`.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Validation` if `subject` differs from the
    /// record's `event_type` or the record breaks a precondition,
    /// `RefreshError::Serialization` if the body cannot be encoded, and
    /// `RefreshError::Broker` if the broker fails or does not acknowledge.
    pub async fn publish(
        &self,
        record: &AvailabilityRefreshMessage,
        subject: RefreshAvailabilityEvent,
        message_group_id: &MessageGroupId,
        deduplication_id: &DeduplicationId,
    ) -> Result<PublishReceipt, RefreshError> {
        publish_record(
            record,
            subject,
            message_group_id,
            deduplication_id,
            &self.topic_arn,
            self.broker.as_ref(),
        )
        .await
    }
}

/// Handles the `PublishMessage` command against `broker`.
///
/// # Errors
///
/// See [`Publisher::publish`].
pub async fn handle_publish_message(
    command: &PublishMessage,
    topic_arn: &str,
    broker: &dyn MessageBroker,
) -> Result<PublishReceipt, RefreshError> {
    publish_record(
        &command.message,
        command.subject,
        &command.message_group_id,
        &command.deduplication_id,
        topic_arn,
        broker,
    )
    .await
}

async fn publish_record(
    record: &dyn RefreshMessage,
    subject: RefreshAvailabilityEvent,
    message_group_id: &MessageGroupId,
    deduplication_id: &DeduplicationId,
    topic_arn: &str,
    broker: &dyn MessageBroker,
) -> Result<PublishReceipt, RefreshError> {
    tracing::info!(
        topic_arn,
        subject = %subject,
        message_group_id = %message_group_id,
        "Publishing refresh message"
    );

    let result = send(
        record,
        subject,
        message_group_id,
        deduplication_id,
        topic_arn,
        broker,
    )
    .await;

    match &result {
        Ok(receipt) => tracing::debug!(
            message_id = %receipt.message_id,
            sequence_number = ?receipt.sequence_number,
            "Refresh message acknowledged"
        ),
        Err(err) => tracing::error!(
            topic_arn,
            subject = %subject,
            message_group_id = %message_group_id,
            error = %err,
            "Failed to publish refresh message"
        ),
    }

    result
}

async fn send(
    record: &dyn RefreshMessage,
    subject: RefreshAvailabilityEvent,
    message_group_id: &MessageGroupId,
    deduplication_id: &DeduplicationId,
    topic_arn: &str,
    broker: &dyn MessageBroker,
) -> Result<PublishReceipt, RefreshError> {
    if record.event_type() != subject {
        return Err(RefreshError::Validation(format!(
            "subject {subject} does not match event_type {}",
            record.event_type()
        )));
    }
    record.validate()?;

    let request = PublishRequest {
        topic_arn: topic_arn.to_owned(),
        subject: subject.as_str().to_owned(),
        message: record.to_json()?,
        message_group_id: message_group_id.as_str().to_owned(),
        deduplication_id: deduplication_id.as_str().to_owned(),
    };

    let response = broker
        .publish(&request)
        .await
        .map_err(|err| into_broker_error(err, &request))?;

    to_receipt(response, subject, &request)
}

fn into_broker_error(err: RefreshError, request: &PublishRequest) -> RefreshError {
    match err {
        RefreshError::Broker { .. } => err,
        other => RefreshError::Broker {
            subject: request.subject.clone(),
            message_group_id: request.message_group_id.clone(),
            detail: other.to_string(),
        },
    }
}

fn to_receipt(
    response: BrokerResponse,
    subject: RefreshAvailabilityEvent,
    request: &PublishRequest,
) -> Result<PublishReceipt, RefreshError> {
    let Some(message_id) = response.acknowledged_id() else {
        return Err(RefreshError::Broker {
            subject: request.subject.clone(),
            message_group_id: request.message_group_id.clone(),
            detail: "broker returned an empty response".into(),
        });
    };

    Ok(PublishReceipt {
        message_id: message_id.to_owned(),
        sequence_number: response.sequence_number.clone(),
        subject,
        message_group_id: request.message_group_id.clone(),
    })
}
