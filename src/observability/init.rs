//! Subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "recipe-explorer-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an [`EnvFilter`] at the configured
/// `trace_level` feeding an OpenTelemetry layer that exports to
/// `~/.local/share/zellij/recipe-explorer/recipe-explorer-otlp.json`.
///
/// Never fails the caller. If the data directory cannot be created tracing
/// stays off, and a second call is ignored.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::observability::init_tracing;
/// use recipe_explorer::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SCOPE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
