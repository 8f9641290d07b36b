//! Subscriber setup connecting `tracing` macros to the file exporter.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE: &str = "zbooks-otlp.json";

/// Level used when the plugin configuration sets none.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// Spans at or above `config.trace_level` (default `info`) are exported to
/// `zbooks-otlp.json` in [`get_data_dir`](crate::infrastructure::get_data_dir).
/// Tracing is best effort: if the directory cannot be created the plugin runs
/// without it, and only the first successful call installs a subscriber.
///
/// # Example
///
/// ```rust,no_run
/// use zbooks::observability::init_tracing;
/// use zbooks::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let resource = Resource::new(vec![KeyValue::new("service.name", "zbooks")]);
    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(super::otlp::SCOPE_NAME));

    let installed = tracing_subscriber::registry().with(filter).with(otel_layer).try_init().is_ok();
    if installed {
        tracing::info!(level, "tracing initialized");
    }
}
