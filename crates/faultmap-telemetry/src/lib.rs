//! Logging setup for faultmap
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a text or
//! JSON formatting layer.

use faultmap_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Initialize logging from configuration
///
/// `RUST_LOG` takes precedence over the configured filter; without a
/// telemetry section, `default_filter` and text output are used.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let (filter, format) = config.map_or((default_filter, LogFormat::Text), |c| {
        (c.log_filter.as_str(), c.log_format)
    });

    let registry = tracing_subscriber::registry().with(build_filter(filter));

    let installed = match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(?format, filter, "logging initialized");

    Ok(())
}

/// `RUST_LOG` if set and valid, else `fallback`, else `info`
fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
