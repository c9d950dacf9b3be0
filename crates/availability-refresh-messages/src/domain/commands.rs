//! Commands for the availability refresh publisher.

use availability_refresh_core::broker::{DeduplicationId, MessageGroupId};
use availability_refresh_core::event::RefreshAvailabilityEvent;

use super::message::AvailabilityRefreshMessage;

/// Command to publish one message to the refresh topic.
#[derive(Debug, Clone)]
pub struct PublishMessage {
    /// The record to send.
    pub message: AvailabilityRefreshMessage,
    /// Subject attribute; must equal the record's `event_type`.
    pub subject: RefreshAvailabilityEvent,
    /// FIFO ordering key chosen by the caller.
    pub message_group_id: MessageGroupId,
    /// Idempotency key chosen by the caller.
    pub deduplication_id: DeduplicationId,
}
