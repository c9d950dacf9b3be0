//! Amazon SNS implementation of the `MessageBroker` trait.

use async_trait::async_trait;
use availability_refresh_core::broker::{BrokerResponse, MessageBroker, PublishRequest};
use availability_refresh_core::error::RefreshError;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sns::error::DisplayErrorContext;

use crate::config::SnsConfig;

/// SNS-backed broker. Cheap to clone; clones share the underlying client.
///
/// The destination topic comes from each `PublishRequest`.
#[derive(Debug, Clone)]
pub struct SnsBroker {
    client: aws_sdk_sns::Client,
}

impl SnsBroker {
    /// Creates a broker from `config`, resolving credentials through the
    /// default AWS provider chain.
    pub async fn connect(config: &SnsConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        tracing::info!(region = %config.region, "SNS client initialized");

        Self::from_client(aws_sdk_sns::Client::new(&sdk_config))
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn from_client(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageBroker for SnsBroker {
    async fn publish(&self, request: &PublishRequest) -> Result<BrokerResponse, RefreshError> {
        let output = self
            .client
            .publish()
            .topic_arn(&request.topic_arn)
            .subject(&request.subject)
            .message(&request.message)
            .message_group_id(&request.message_group_id)
            .message_deduplication_id(&request.deduplication_id)
            .send()
            .await
            .map_err(|e| RefreshError::Broker {
                subject: request.subject.clone(),
                message_group_id: request.message_group_id.clone(),
                detail: format!(
                    "SNS publish to {} failed: {}",
                    request.topic_arn,
                    DisplayErrorContext(&e)
                ),
            })?;

        Ok(BrokerResponse {
            message_id: output.message_id().map(str::to_owned),
            sequence_number: output.sequence_number().map(str::to_owned),
        })
    }
}

