//! Availability request message.

use serde::{Deserialize, Serialize};

/// Emitted when a client asks for the availability of a store on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AvailabilityRequestedMessage {
    /// Correlation id of the originating request.
    pub andgo_correlation_id: String,
    /// Requested calendar day, `YYYY-MM-DD`.
    pub requested_day: String,
    /// Vehicle identification number.
    pub vin: String,
    /// The requesting user.
    pub user_id: String,
    /// The fleet the vehicle belongs to.
    pub fleet_id: String,
    /// The store being queried.
    pub store_id: String,
    /// Jobs the appointment would cover, in order.
    pub jobs: Vec<String>,
}
