//! Producer error types.

use availability_refresh_core::error::RefreshError;
use availability_refresh_sns::SnsConfigError;
use thiserror::Error;

/// Startup and run errors for the producer binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A sample message could not be built.
    #[error("sample error: {0}")]
    Sample(#[from] RefreshError),

    /// One or more publishes failed.
    #[error("{failed} of {attempted} messages failed to publish")]
    Publish {
        /// Number of failed publishes.
        failed: usize,
        /// Number of attempted publishes.
        attempted: usize,
    },
}

impl From<SnsConfigError> for AppError {
    fn from(err: SnsConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
