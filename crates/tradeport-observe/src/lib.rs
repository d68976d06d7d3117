//! Observability setup for Tradeport.
//!
//! One job: install the global tracing subscriber (structured fmt output,
//! `RUST_LOG` filtering, optional OpenTelemetry export) so every crate's
//! `tracing` calls land somewhere useful.

pub mod tracing_setup;
