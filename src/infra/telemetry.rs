use std::sync::Once;

use metrics::{Unit, describe_counter, describe_gauge};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "bacheca_posts_created_total",
            Unit::Count,
            "Total number of posts created."
        );
        describe_counter!(
            "bacheca_posts_updated_total",
            Unit::Count,
            "Total number of post titles edited."
        );
        describe_counter!(
            "bacheca_posts_deleted_total",
            Unit::Count,
            "Total number of posts deleted."
        );
        describe_counter!(
            "bacheca_flash_sessions_evicted_total",
            Unit::Count,
            "Sessions dropped with undelivered flash messages to stay within the session cap."
        );
        describe_gauge!(
            "bacheca_flash_sessions",
            Unit::Count,
            "Current number of sessions holding undelivered flash messages."
        );
    });
}
