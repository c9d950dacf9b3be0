//! Test brokers — fake `MessageBroker` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use availability_refresh_core::broker::{BrokerResponse, MessageBroker, PublishRequest};
use availability_refresh_core::error::RefreshError;

/// A broker that records every publish request and answers each with the
/// configured response.
#[derive(Debug)]
pub struct RecordingBroker {
    response: BrokerResponse,
    requests: Mutex<Vec<PublishRequest>>,
}

impl RecordingBroker {
    /// Create a recording broker that answers every publish with `response`.
    #[must_use]
    pub fn new(response: BrokerResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a recording broker whose responses carry `message_id`.
    #[must_use]
    pub fn acknowledging(message_id: &str) -> Self {
        Self::new(BrokerResponse {
            message_id: Some(message_id.to_owned()),
            sequence_number: None,
        })
    }

    /// Returns a snapshot of all requests received, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<PublishRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageBroker for RecordingBroker {
    async fn publish(&self, request: &PublishRequest) -> Result<BrokerResponse, RefreshError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// A broker that accepts every call but returns an empty acknowledgement.
#[derive(Debug)]
pub struct EmptyResponseBroker;

#[async_trait]
impl MessageBroker for EmptyResponseBroker {
    async fn publish(&self, _request: &PublishRequest) -> Result<BrokerResponse, RefreshError> {
        Ok(BrokerResponse::default())
    }
}

/// A broker that always fails as if the connection were refused. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingBroker;

#[async_trait]
impl MessageBroker for FailingBroker {
    async fn publish(&self, request: &PublishRequest) -> Result<BrokerResponse, RefreshError> {
        Err(RefreshError::Broker {
            subject: request.subject.clone(),
            message_group_id: request.message_group_id.clone(),
            detail: "connection refused".into(),
        })
    }
}
