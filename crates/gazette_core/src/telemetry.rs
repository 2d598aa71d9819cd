//! OpenTelemetry tracing for local debugging.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, TracerProvider},
};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a subscriber that logs to stderr and exports spans to stdout.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies (for example
/// `"gazette=debug"`).
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_telemetry(default_filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    let provider = TracerProvider::builder()
        .with_simple_exporter(SpanExporter::default())
        .with_id_generator(RandomIdGenerator::default())
        .with_sampler(Sampler::AlwaysOn)
        .with_resource(Resource::default())
        .build();
    let tracer = provider.tracer("gazette");
    opentelemetry::global::set_tracer_provider(provider);

    let spans = tracing_opentelemetry::layer()
        .with_tracer(tracer)
        .with_filter(filter());
    let logs = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter());

    tracing_subscriber::registry().with(spans).with(logs).try_init()?;
    Ok(())
}

/// Flush pending spans. Call before the process exits.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
