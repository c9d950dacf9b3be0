//! Sample messages for exercising the refresh topic end to end.
//!
//! Identifiers are fresh UUIDs on every call. Timestamps and the requested day
//! come from the injected clock so tests can pin them.

use availability_refresh_core::clock::Clock;
use availability_refresh_core::error::RefreshError;
use availability_refresh_messages::domain::appointment::{
    AppointmentCanceledMessage, AppointmentScheduledMessage, ServiceWindow,
};
use availability_refresh_messages::domain::asset::{
    AssetEvent, AssetUpdatedMessage, StoreAssetEventAction, StoreAssetType,
};
use availability_refresh_messages::domain::availability::AvailabilityRequestedMessage;
use availability_refresh_messages::domain::message::AvailabilityRefreshMessage;
use chrono::Days;
use uuid::Uuid;

/// Vehicle id used by the availability request sample.
pub const SAMPLE_VIN: &str = "2HHFD55707H200235";

const HOUR: i64 = 60 * 60;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A one-window appointment starting an hour from now: one hour of service,
/// asset released eleven hours after the start.
///
/// # Errors
///
/// Returns `RefreshError::Validation` if the clock is so close to `i64::MAX`
/// that the window cannot be ordered.
pub fn appointment_scheduled(
    clock: &dyn Clock,
) -> Result<AppointmentScheduledMessage, RefreshError> {
    let start_time = clock.unix_timestamp().saturating_add(HOUR);
    let window = ServiceWindow::new(
        new_id(),
        start_time,
        start_time.saturating_add(HOUR),
        start_time.saturating_add(11 * HOUR),
        vec![new_id(), new_id()],
        new_id(),
    )?;

    Ok(AppointmentScheduledMessage {
        user_id: new_id(),
        fleet_id: new_id(),
        store_id: new_id(),
        service_windows: vec![window],
    })
}

/// A cancellation of a random appointment.
#[must_use]
pub fn appointment_canceled() -> AppointmentCanceledMessage {
    AppointmentCanceledMessage {
        user_id: new_id(),
        fleet_id: new_id(),
        store_id: new_id(),
        appointment_id: new_id(),
    }
}

/// An availability request for `days_offset` days after today.
///
/// # Errors
///
/// Returns `RefreshError::Validation` if the requested day is out of range.
pub fn availability_requested(
    clock: &dyn Clock,
    days_offset: u32,
) -> Result<AvailabilityRequestedMessage, RefreshError> {
    let requested_day = clock
        .today()
        .checked_add_days(Days::new(u64::from(days_offset)))
        .ok_or_else(|| {
            RefreshError::Validation(format!(
                "requested day {days_offset} days ahead is out of range"
            ))
        })?;

    Ok(AvailabilityRequestedMessage {
        andgo_correlation_id: new_id(),
        requested_day: requested_day.format("%Y-%m-%d").to_string(),
        vin: SAMPLE_VIN.to_owned(),
        user_id: new_id(),
        fleet_id: new_id(),
        store_id: new_id(),
        jobs: vec![new_id(), new_id()],
    })
}

/// A single service bay added to a store.
#[must_use]
pub fn asset_updated() -> AssetUpdatedMessage {
    AssetUpdatedMessage {
        andgo_correlation_id: new_id(),
        store_id: new_id(),
        user_id: new_id(),
        fleet_id: new_id(),
        assets: vec![AssetEvent {
            id: new_id(),
            asset_type: StoreAssetType::ServiceBay,
            action: StoreAssetEventAction::Added,
        }],
    }
}

/// One sample of each message variant, in publish order.
///
/// # Errors
///
/// See [`appointment_scheduled`] and [`availability_requested`].
pub fn all(
    clock: &dyn Clock,
    days_offset: u32,
) -> Result<Vec<AvailabilityRefreshMessage>, RefreshError> {
    Ok(vec![
        appointment_scheduled(clock)?.into(),
        appointment_canceled().into(),
        availability_requested(clock, days_offset)?.into(),
        asset_updated().into(),
    ])
}
