//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{ServerConfig, observability::LogFormat};

use super::{ObservabilityError, settings};

/// Install the global subscriber and apply request logging thresholds.
pub(crate) fn init_logging(config: &ServerConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    let filter = build_env_filter(&config.logging.log_level);

    match config.logging.log_format {
        LogFormat::Compact => install(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
            filter,
        ),
        LogFormat::Json => install(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true),
            filter,
        ),
    }
}

fn build_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_ignored| {
        EnvFilter::new(format!("{log_level},h2=warn,hyper=warn,sqlx=warn"))
    })
}

fn install<L>(fmt_layer: L, filter: EnvFilter) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}
