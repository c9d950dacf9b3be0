//! Event-type discriminator and the message abstraction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RefreshError;

/// The event-type tag carried by every refresh message, both in the JSON
/// body (`event_type`) and as the publish subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefreshAvailabilityEvent {
    /// An appointment was created.
    AppointmentScheduled,
    /// An appointment was canceled.
    AppointmentCanceled,
    /// An appointment was moved. No message variant carries this tag yet.
    AppointmentRescheduled,
    /// Availability was requested for a day.
    AvailabilityRequest,
    /// One or more store assets changed.
    AssetUpdate,
}

impl RefreshAvailabilityEvent {
    /// Every event type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::AppointmentScheduled,
        Self::AppointmentCanceled,
        Self::AppointmentRescheduled,
        Self::AvailabilityRequest,
        Self::AssetUpdate,
    ];

    /// Returns the wire literal.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AppointmentScheduled => "APPOINTMENT_SCHEDULED",
            Self::AppointmentCanceled => "APPOINTMENT_CANCELED",
            Self::AppointmentRescheduled => "APPOINTMENT_RESCHEDULED",
            Self::AvailabilityRequest => "AVAILABILITY_REQUEST",
            Self::AssetUpdate => "ASSET_UPDATE",
        }
    }
}

impl fmt::Display for RefreshAvailabilityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefreshAvailabilityEvent {
    type Err = RefreshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| RefreshError::Construction(format!("unknown event_type: {s}")))
    }
}

/// Trait implemented by every publishable refresh message.
pub trait RefreshMessage: Send + Sync + fmt::Debug {
    /// Returns the event-type tag of this record.
    fn event_type(&self) -> RefreshAvailabilityEvent;

    /// Checks preconditions beyond field presence.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Validation` if the record breaks a precondition.
    fn validate(&self) -> Result<(), RefreshError> {
        Ok(())
    }

    /// Renders the record as its JSON wire body.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Serialization` if encoding fails.
    fn to_json(&self) -> Result<String, RefreshError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_wire_literal() {
        for event in RefreshAvailabilityEvent::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.as_str()));

            let parsed: RefreshAvailabilityEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, event);
        }
    }

    #[test]
    fn test_from_str_accepts_wire_literals() {
        assert_eq!(
            "ASSET_UPDATE".parse::<RefreshAvailabilityEvent>().unwrap(),
            RefreshAvailabilityEvent::AssetUpdate
        );
        assert_eq!(
            RefreshAvailabilityEvent::AppointmentRescheduled.to_string(),
            "APPOINTMENT_RESCHEDULED"
        );
    }

    #[test]
    fn test_from_str_rejects_lowercase_and_unknown_values() {
        for raw in ["asset_update", "APPOINTMENT_MOVED", ""] {
            match raw.parse::<RefreshAvailabilityEvent>() {
                Err(RefreshError::Construction(msg)) => assert!(msg.contains("event_type")),
                other => panic!("expected Construction error for {raw:?}, got {other:?}"),
            }
        }
    }
}
