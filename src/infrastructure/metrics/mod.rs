//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Generated link counts by link type
//! - Link generation failure counts by reason

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::application::services::LinkError;

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Generated link counter - tracks successful generations by link type
pub static LINKS_GENERATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("links_generated_total", "Total number of deep links generated")
            .namespace("link_server"),
        &["type"],
    )
    .expect("Failed to create LINKS_GENERATED_TOTAL metric")
});

/// Failed generation counter - tracks validation failures by reason
pub static LINK_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("link_failures_total", "Total number of rejected link requests")
            .namespace("link_server"),
        &["reason"],
    )
    .expect("Failed to create LINK_FAILURES_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(LINKS_GENERATED_TOTAL.clone()))
        .expect("Failed to register LINKS_GENERATED_TOTAL");
    registry
        .register(Box::new(LINK_FAILURES_TOTAL.clone()))
        .expect("Failed to register LINK_FAILURES_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Metrics should be valid UTF-8")
}

/// Record a successfully generated link
pub fn record_link_generated(link_type: &str) {
    LINKS_GENERATED_TOTAL
        .with_label_values(&[link_type])
        .inc();
}

/// Record a rejected link request
pub fn record_link_failure(error: &LinkError) {
    let reason = match error {
        LinkError::MissingPayload => "missing_payload",
        LinkError::MissingRequiredField { .. } => "missing_required_field",
        LinkError::UnknownLinkType(_) => "unknown_link_type",
    };
    LINK_FAILURES_TOTAL.with_label_values(&[reason]).inc();
}
