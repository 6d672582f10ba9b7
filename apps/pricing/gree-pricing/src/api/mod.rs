//! HTTP surface: domain routes, docs, health, readiness and metrics

pub mod ops;

use axum::{Router, middleware};
use axum_helpers::{create_router, health_router, parse_cors_origins};
use domain_pricing::{PricingService, RateRepository};
use observability::metrics_middleware;
use std::sync::Arc;

use crate::config::Config;
use crate::openapi::ApiDoc;

/// Routes nested under `/api`
pub fn routes<R: RateRepository + 'static>(service: Arc<PricingService<R>>) -> Router {
    Router::new().nest("/pricing", domain_pricing::handlers::router(service))
}

/// Assemble the full application router
pub fn app<R: RateRepository + 'static>(
    service: Arc<PricingService<R>>,
    config: &Config,
) -> eyre::Result<Router> {
    let cors_origins = parse_cors_origins(&config.cors_origins)?;

    let router = create_router::<ApiDoc>(routes(Arc::clone(&service)), cors_origins)
        .merge(health_router(config.app))
        .merge(ops::router(service))
        .layer(middleware::from_fn(metrics_middleware));

    Ok(router)
}
