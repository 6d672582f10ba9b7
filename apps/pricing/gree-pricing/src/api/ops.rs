//! Readiness and metrics endpoints

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{ErrorCode, error_response};
use domain_pricing::{PricingService, RateRepository};
use observability::metrics_handler;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct ReadyResponse {
    status: &'static str,
}

/// Ready once the rate storage answers
async fn ready<R: RateRepository>(State(service): State<Arc<PricingService<R>>>) -> Response {
    match service.check_storage().await {
        Ok(()) => Json(ReadyResponse { status: "ready" }).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Rate storage is not readable",
                ErrorCode::ServiceUnavailable,
            )
        }
    }
}

pub fn router<R: RateRepository + 'static>(service: Arc<PricingService<R>>) -> Router {
    Router::new()
        .route("/ready", get(ready::<R>))
        .route("/metrics", get(metrics_handler))
        .with_state(service)
}
