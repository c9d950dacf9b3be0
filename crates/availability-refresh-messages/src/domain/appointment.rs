//! Appointment messages.

use availability_refresh_core::error::RefreshError;
use serde::{Deserialize, Serialize};

/// Emitted when an appointment has been created.
///
/// ```json
/// {
///   "event_type": "APPOINTMENT_SCHEDULED",
///   "user_id": "e863b41f-acdc-4eff-93eb-b47a60879dec",
///   "fleet_id": "e35396fb-053e-4479-b7e2-2ff207073485",
///   "store_id": "4fe35389-f3fe-4996-ab48-86e5225795f9",
///   "service_windows": [{
///     "andgo_correlation_id": "2b0c8f0e-5f43-4c8e-9b61-3f0a3f3d7c11",
///     "start_time": 1698920446,
///     "service_completion_time": 1698924046,
///     "end_time": 1698960046,
///     "jobs": ["oil-change", "tire-rotation"],
///     "availability_asset": "487792fe-b115-4889-9299-2404f7e2807d"
///   }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppointmentScheduledMessage {
    /// The user who booked the appointment.
    pub user_id: String,
    /// The fleet the vehicle belongs to.
    pub fleet_id: String,
    /// The store performing the work.
    pub store_id: String,
    /// Booked windows, in booking order.
    pub service_windows: Vec<ServiceWindow>,
}

impl AppointmentScheduledMessage {
    /// Checks every service window's timestamp ordering.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Validation` naming the first out-of-order window.
    pub fn validate(&self) -> Result<(), RefreshError> {
        self.service_windows.iter().try_for_each(ServiceWindow::validate)
    }
}

/// One or more jobs performed within a single store asset (e.g. a service bay).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceWindow {
    /// Correlation id tying the window back to the booking request.
    pub andgo_correlation_id: String,
    /// Unix seconds when work starts.
    pub start_time: i64,
    /// Unix seconds when the service itself is complete.
    pub service_completion_time: i64,
    /// Unix seconds when the asset is released.
    pub end_time: i64,
    /// Job identifiers, in execution order.
    pub jobs: Vec<String>,
    /// The asset the window occupies.
    pub availability_asset: String,
}

impl ServiceWindow {
    /// Builds a window, enforcing
    /// `start_time <= service_completion_time <= end_time`.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Validation` if the timestamps are out of order.
    pub fn new(
        andgo_correlation_id: impl Into<String>,
        start_time: i64,
        service_completion_time: i64,
        end_time: i64,
        jobs: Vec<String>,
        availability_asset: impl Into<String>,
    ) -> Result<Self, RefreshError> {
        let window = Self {
            andgo_correlation_id: andgo_correlation_id.into(),
            start_time,
            service_completion_time,
            end_time,
            jobs,
            availability_asset: availability_asset.into(),
        };
        window.validate()?;
        Ok(window)
    }

    /// Checks the timestamp ordering.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::Validation` if the timestamps are out of order.
    pub fn validate(&self) -> Result<(), RefreshError> {
        if self.start_time <= self.service_completion_time
            && self.service_completion_time <= self.end_time
        {
            return Ok(());
        }
        Err(RefreshError::Validation(format!(
            "service window {} is out of order: start {} / completion {} / end {}",
            self.andgo_correlation_id, self.start_time, self.service_completion_time, self.end_time
        )))
    }
}

/// Emitted when an appointment has been canceled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppointmentCanceledMessage {
    /// The user who owned the appointment.
    pub user_id: String,
    /// The fleet the vehicle belongs to.
    pub fleet_id: String,
    /// The store that held the appointment.
    pub store_id: String,
    /// The canceled appointment.
    pub appointment_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> Vec<String> {
        vec!["j1".to_owned(), "j2".to_owned()]
    }

    #[test]
    fn test_service_window_accepts_ordered_and_equal_timestamps() {
        assert!(
            ServiceWindow::new(
                "c1",
                1_698_920_446,
                1_698_924_046,
                1_698_960_046,
                jobs(),
                "bay-1"
            )
            .is_ok()
        );
        assert!(ServiceWindow::new("c1", 100, 100, 100, jobs(), "bay-1").is_ok());
    }

    #[test]
    fn test_service_window_rejects_completion_before_start() {
        // Arrange / Act
        let result = ServiceWindow::new("c1", 200, 100, 300, jobs(), "bay-1");

        // Assert
        match result {
            Err(RefreshError::Validation(msg)) => assert!(msg.contains("c1")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_service_window_rejects_end_before_completion() {
        assert!(matches!(
            ServiceWindow::new("c1", 100, 300, 200, jobs(), "bay-1"),
            Err(RefreshError::Validation(_))
        ));
    }

    #[test]
    fn test_scheduled_validate_reports_the_out_of_order_window() {
        // Arrange
        let good = ServiceWindow::new("good", 1, 2, 3, jobs(), "bay-1").unwrap();
        let bad = ServiceWindow {
            andgo_correlation_id: "bad".to_owned(),
            start_time: 3,
            service_completion_time: 2,
            end_time: 1,
            jobs: jobs(),
            availability_asset: "bay-2".to_owned(),
        };
        let message = AppointmentScheduledMessage {
            user_id: "u1".to_owned(),
            fleet_id: "f1".to_owned(),
            store_id: "s1".to_owned(),
            service_windows: vec![good, bad],
        };

        // Act
        let result = message.validate();

        // Assert
        match result {
            Err(RefreshError::Validation(msg)) => assert!(msg.contains("bad")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_scheduled_with_no_windows_is_valid() {
        let message = AppointmentScheduledMessage {
            user_id: "u1".to_owned(),
            fleet_id: "f1".to_owned(),
            store_id: "s1".to_owned(),
            service_windows: Vec::new(),
        };

        assert!(message.validate().is_ok());
    }
}
