//! Tracing subscriber initialization for the wizard crates.
//!
//! The core crates only emit `tracing` events; the hosting application calls
//! [`init_tracing`] once at startup to decide where they go. Output is a
//! structured fmt layer (human-readable or JSON lines) filtered by
//! `RUST_LOG`, with an optional OpenTelemetry bridge for local span
//! inspection.

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// How the subscriber should be assembled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObserveConfig {
    /// Emit JSON lines instead of the human-readable format (for shipping
    /// portal logs to an aggregator).
    pub json: bool,
    /// Bridge tracing spans to OpenTelemetry with a stdout exporter.
    /// Suitable for local development; swap the exporter for OTLP in
    /// production.
    pub otel: bool,
}

/// Kept so the OTel provider can be flushed on shutdown.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Install the global tracing subscriber.
///
/// Respects `RUST_LOG` via `EnvFilter::from_default_env()` and records span
/// close timing, which is where wizard submission latency shows up.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: ObserveConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::from_default_env();

    let tracer = if config.otel {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("tradeport");
        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        Some(tracer)
    } else {
        None
    };

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .with(tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t)))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .with(tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t)))
            .try_init()?;
    }

    Ok(())
}

/// Flush pending spans and shut down the OTel provider, if one was set up.
///
/// Safe to call when OTel was never enabled (no-op in that case).
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}
