//! The closed family of refresh messages, tagged by `event_type`.

use availability_refresh_core::error::RefreshError;
use availability_refresh_core::event::{RefreshAvailabilityEvent, RefreshMessage};
use serde::{Deserialize, Serialize};

use super::appointment::{AppointmentCanceledMessage, AppointmentScheduledMessage};
use super::asset::AssetUpdatedMessage;
use super::availability::AvailabilityRequestedMessage;

/// Every message the availability refresh topic carries.
///
/// Serializes as the variant's fields with an `event_type` key holding the
/// variant's wire literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum AvailabilityRefreshMessage {
    /// An appointment was created.
    #[serde(rename = "APPOINTMENT_SCHEDULED")]
    AppointmentScheduled(AppointmentScheduledMessage),
    /// An appointment was canceled.
    #[serde(rename = "APPOINTMENT_CANCELED")]
    AppointmentCanceled(AppointmentCanceledMessage),
    /// Availability was requested for a day.
    #[serde(rename = "AVAILABILITY_REQUEST")]
    AvailabilityRequested(AvailabilityRequestedMessage),
    /// Store assets changed.
    #[serde(rename = "ASSET_UPDATE")]
    AssetUpdated(AssetUpdatedMessage),
}

impl AvailabilityRefreshMessage {
    /// Parses a JSON wire body.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Construction` if a field is missing, has the
    /// wrong kind, is not part of the variant, or `event_type` names no
    /// message variant.
    pub fn from_json(body: &str) -> Result<Self, RefreshError> {
        serde_json::from_str(body)
            .map_err(|e| RefreshError::Construction(format!("invalid message body: {e}")))
    }

    /// Returns the store the message concerns.
    #[must_use]
    pub fn store_id(&self) -> &str {
        match self {
            Self::AppointmentScheduled(m) => &m.store_id,
            Self::AppointmentCanceled(m) => &m.store_id,
            Self::AvailabilityRequested(m) => &m.store_id,
            Self::AssetUpdated(m) => &m.store_id,
        }
    }
}

impl RefreshMessage for AvailabilityRefreshMessage {
    fn event_type(&self) -> RefreshAvailabilityEvent {
        match self {
            Self::AppointmentScheduled(_) => RefreshAvailabilityEvent::AppointmentScheduled,
            Self::AppointmentCanceled(_) => RefreshAvailabilityEvent::AppointmentCanceled,
            Self::AvailabilityRequested(_) => RefreshAvailabilityEvent::AvailabilityRequest,
            Self::AssetUpdated(_) => RefreshAvailabilityEvent::AssetUpdate,
        }
    }

    fn validate(&self) -> Result<(), RefreshError> {
        match self {
            Self::AppointmentScheduled(m) => m.validate(),
            Self::AppointmentCanceled(_)
            | Self::AvailabilityRequested(_)
            | Self::AssetUpdated(_) => Ok(()),
        }
    }

    fn to_json(&self) -> Result<String, RefreshError> {
        serde_json::to_string(self).map_err(|e| RefreshError::Serialization(e.to_string()))
    }
}

impl From<AppointmentScheduledMessage> for AvailabilityRefreshMessage {
    fn from(message: AppointmentScheduledMessage) -> Self {
        Self::AppointmentScheduled(message)
    }
}

impl From<AppointmentCanceledMessage> for AvailabilityRefreshMessage {
    fn from(message: AppointmentCanceledMessage) -> Self {
        Self::AppointmentCanceled(message)
    }
}

impl From<AvailabilityRequestedMessage> for AvailabilityRefreshMessage {
    fn from(message: AvailabilityRequestedMessage) -> Self {
        Self::AvailabilityRequested(message)
    }
}

impl From<AssetUpdatedMessage> for AvailabilityRefreshMessage {
    fn from(message: AssetUpdatedMessage) -> Self {
        Self::AssetUpdated(message)
    }
}
