//! Logging setup, powered by tracing-subscriber.

use crate::infra::config::LogFormat;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Builds the filter from `RUST_LOG` when set, otherwise from `level`.
/// Noisy HTTP internals are held at `warn` either way.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut directives = vec![level.to_string()];
    for (target, lvl) in [("hyper", "warn"), ("h2", "warn"), ("tower", "warn")] {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = build_env_filter(level)?;

    let fmt_layer = match format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
