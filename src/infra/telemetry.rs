use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::{
    application::admin::posts::POST_MUTATIONS_METRIC,
    config::{LogFormat, LoggingSettings},
};

use super::error::InfraError;

/// Installs the global subscriber and describes the post mutation counter.
///
/// Fails if a subscriber is already installed.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
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
        .try_init()?;

    describe_counter!(
        POST_MUTATIONS_METRIC,
        Unit::Count,
        "Posts created, updated or deleted from the admin panel, by `action`."
    );
    Ok(())
}
