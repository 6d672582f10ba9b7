//! Observability utilities for the pricing service.
//!
//! This crate provides:
//! - Prometheus recorder installation and the `/metrics` handler
//! - Axum middleware for request counters and latency histograms
//! - [`PricingMetrics`] for evaluation and rate-change events
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, PricingMetrics};
//!
//! init_metrics()?;
//! PricingMetrics::record_evaluation("mid_range", "normal", false);
//!
//! let app = Router::new().route("/metrics", get(metrics_handler));
//! ```

pub mod middleware;
pub mod pricing;

pub use middleware::metrics_middleware;
pub use pricing::PricingMetrics;

pub use metrics_exporter_prometheus::BuildError;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder.
///
/// Idempotent: the first successful call installs the recorder, later calls
/// return the same handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();
        Ok(handle)
    })
}

/// Get the metrics handle (None until `init_metrics` succeeded)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for the `/metrics` endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_gauge, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP responses with a 4xx or 5xx status"
    );

    describe_counter!(
        "pricing_evaluations_total",
        "Price evaluations by product tier and sales channel"
    );
    describe_counter!(
        "pricing_loss_evaluations_total",
        "Evaluations whose actual profit came out negative"
    );
    describe_counter!(
        "pricing_rate_updates_total",
        "Accepted and rejected rate configuration changes"
    );
    describe_gauge!(
        "pricing_rate_value",
        "Currently active fee rate, labelled by rate name"
    );
}
