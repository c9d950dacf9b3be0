//! Sequential publish loop.

use availability_refresh_core::broker::{DeduplicationId, MessageGroupId};
use availability_refresh_core::error::RefreshError;
use availability_refresh_core::event::{RefreshAvailabilityEvent, RefreshMessage};
use availability_refresh_messages::application::publisher::{PublishReceipt, Publisher};
use availability_refresh_messages::domain::message::AvailabilityRefreshMessage;

/// Result of publishing one message.
#[derive(Debug)]
pub struct Outcome {
    /// The event type that was published.
    pub event_type: RefreshAvailabilityEvent,
    /// The broker acknowledgement, or why there was none.
    pub result: Result<PublishReceipt, RefreshError>,
}

/// Results of one run, in publish order.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// One entry per attempted message.
    pub outcomes: Vec<Outcome>,
}

impl RunSummary {
    /// Number of messages attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of messages that were not acknowledged.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Publishes `messages` one at a time, continuing past failures.
///
/// Each message is grouped by its `store_id` and gets a fresh deduplication id.
pub async fn run(publisher: &Publisher, messages: Vec<AvailabilityRefreshMessage>) -> RunSummary {
    let mut summary = RunSummary::default();

    for message in messages {
        let event_type = message.event_type();
        let result = publish_one(publisher, &message).await;

        match &result {
            Ok(receipt) => tracing::info!(
                event_type = %event_type,
                message_id = %receipt.message_id,
                topic_arn = publisher.topic_arn(),
                "Published sample message"
            ),
            // The publisher has already logged the failure at error level.
            Err(err) => tracing::debug!(
                event_type = %event_type,
                error = %err,
                "Sample message was not published"
            ),
        }

        summary.outcomes.push(Outcome { event_type, result });
    }

    summary
}

async fn publish_one(
    publisher: &Publisher,
    message: &AvailabilityRefreshMessage,
) -> Result<PublishReceipt, RefreshError> {
    let message_group_id = MessageGroupId::new(message.store_id())?;
    let deduplication_id = DeduplicationId::generate();

    publisher
        .publish(
            message,
            message.event_type(),
            &message_group_id,
            &deduplication_id,
        )
        .await
}
