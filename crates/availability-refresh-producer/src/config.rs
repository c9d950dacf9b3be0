//! Producer configuration, read from the environment.

use availability_refresh_sns::SnsConfig;

use crate::error::AppError;

/// Environment variable holding how many days ahead availability is requested.
pub const DAYS_OFFSET_VAR: &str = "AVAILABILITY_REFRESH_DAYS_OFFSET";

/// Days ahead of today used when the variable is unset.
pub const DEFAULT_DAYS_OFFSET: u32 = 6;

/// Everything the producer needs to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerConfig {
    /// Broker connection settings.
    pub sns: SnsConfig,
    /// Days ahead of today for the sample `requested_day`.
    pub days_offset: u32,
}

impl ProducerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the first missing or invalid variable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// See [`ProducerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let sns = SnsConfig::from_lookup(&lookup)?;

        let days_offset = match lookup(DAYS_OFFSET_VAR) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AppError::Config(format!(
                    "{DAYS_OFFSET_VAR} must be a non-negative integer: {e}"
                ))
            })?,
            None => DEFAULT_DAYS_OFFSET,
        };

        Ok(Self { sns, days_offset })
    }
}
