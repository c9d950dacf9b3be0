//! Availability refresh producer entry point.

use std::error::Error;
use std::sync::Arc;

use availability_refresh_core::clock::SystemClock;
use availability_refresh_messages::application::publisher::Publisher;
use availability_refresh_producer::config::ProducerConfig;
use availability_refresh_producer::error::AppError;
use availability_refresh_producer::{harness, samples};
use availability_refresh_sns::SnsBroker;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ProducerConfig::from_env()?;
    tracing::info!(
        topic_arn = %config.sns.topic_arn,
        days_offset = config.days_offset,
        "Starting availability refresh producer"
    );

    let broker = Arc::new(SnsBroker::connect(&config.sns).await);
    let publisher = Publisher::new(broker, config.sns.topic_arn.clone());

    let messages = samples::all(&SystemClock, config.days_offset).map_err(AppError::from)?;
    let summary = harness::run(&publisher, messages).await;

    if summary.failed() > 0 {
        return Err(AppError::Publish {
            failed: summary.failed(),
            attempted: summary.attempted(),
        }
        .into());
    }

    tracing::info!(published = summary.attempted(), "All sample messages published");
    Ok(())
}
