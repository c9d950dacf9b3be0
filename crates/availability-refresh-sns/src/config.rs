//! SNS connection configuration.

use thiserror::Error;

/// Environment variable holding the destination topic ARN.
pub const TOPIC_ARN_VAR: &str = "AVAILABILITY_REFRESH_TOPIC_ARN";

/// Environment variable overriding the client region.
pub const REGION_VAR: &str = "AWS_REGION";

/// Configuration errors for the SNS client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnsConfigError {
    /// A required variable is not set.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set but unusable.
    #[error("{var} is invalid: {reason}")]
    Invalid {
        /// The offending variable.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Where and how to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnsConfig {
    /// FIFO topic ARN, e.g.
    /// `arn:aws:sns:us-west-2:123456789012:availability-update-dev.fifo`.
    pub topic_arn: String,
    /// Region the client signs requests for.
    pub region: String,
}

impl SnsConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `AVAILABILITY_REFRESH_TOPIC_ARN`: ARN of a FIFO topic
    ///
    /// Optional:
    /// - `AWS_REGION`: defaults to the region segment of the topic ARN
    ///
    /// # Errors
    ///
    /// Returns `SnsConfigError` if the topic ARN is missing or malformed.
    pub fn from_env() -> Result<Self, SnsConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// See [`SnsConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SnsConfigError> {
        let topic_arn = lookup(TOPIC_ARN_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(SnsConfigError::Missing(TOPIC_ARN_VAR))?;
        let arn_region = fifo_topic_region(&topic_arn)?;

        let region = lookup(REGION_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| arn_region.to_owned());

        Ok(Self { topic_arn, region })
    }
}

/// Returns the region of a FIFO SNS topic ARN
/// (`arn:<partition>:sns:<region>:<account>:<name>.fifo`).
fn fifo_topic_region(arn: &str) -> Result<&str, SnsConfigError> {
    let invalid = |reason: &str| SnsConfigError::Invalid {
        var: TOPIC_ARN_VAR,
        reason: reason.to_owned(),
    };

    let parts: Vec<&str> = arn.split(':').collect();
    let [prefix, _partition, service, region, _account, name] = parts.as_slice() else {
        return Err(invalid("expected arn:<partition>:sns:<region>:<account>:<topic>"));
    };
    if *prefix != "arn" || *service != "sns" {
        return Err(invalid("not an SNS topic ARN"));
    }
    if region.is_empty() {
        return Err(invalid("missing region"));
    }
    if !name.ends_with(".fifo") {
        return Err(invalid("message group ids require a FIFO topic (.fifo)"));
    }
    Ok(*region)
}
