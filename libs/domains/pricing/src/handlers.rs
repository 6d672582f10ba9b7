//! HTTP handlers for the pricing domain

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use axum_helpers::{
    JsonBody, ParsedPath, ValidatedJson,
    errors::responses::{
        BadRequestRateResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::catalog::{MountType, Product, ProductEvaluation};
use crate::error::PricingResult;
use crate::evaluator::PricingBreakdown;
use crate::models::{
    ChannelOption, ChannelType, EvaluateRequest, LineItemKind, ProductEvaluateRequest,
    ProductTier, TierOption, TierRateUpdate,
};
use crate::rates::{RateConfig, TierCommissions};
use crate::repository::RateRepository;
use crate::service::PricingService;

const TAG: &str = "pricing";

/// OpenAPI documentation for the pricing API
#[derive(OpenApi)]
#[openapi(
    paths(
        evaluate,
        get_rates,
        update_rates,
        set_tier_rate,
        reset_rates,
        list_tiers,
        list_channels,
        list_products,
        get_product,
        evaluate_product,
    ),
    components(
        schemas(
            EvaluateRequest,
            PricingBreakdown,
            ProductTier,
            ChannelType,
            LineItemKind,
            RateConfig,
            TierCommissions,
            TierRateUpdate,
            TierOption,
            ChannelOption,
            Product,
            MountType,
            ProductEvaluateRequest,
            ProductEvaluation,
        ),
        responses(
            BadRequestValidationResponse,
            BadRequestRateResponse,
            NotFoundResponse,
            InternalServerErrorResponse,
        )
    ),
    tags(
        (name = TAG, description = "Subsidy, commission and channel fee evaluation")
    )
)]
pub struct ApiDoc;

/// Create the pricing router. The service is shared so the app can keep a handle.
pub fn router<R: RateRepository + 'static>(shared_service: Arc<PricingService<R>>) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate::<R>))
        .route("/rates", get(get_rates::<R>).put(update_rates::<R>))
        .route("/rates/tiers/{tier}", put(set_tier_rate::<R>))
        .route("/rates/reset", post(reset_rates::<R>))
        .route("/tiers", get(list_tiers::<R>))
        .route("/channels", get(list_channels::<R>))
        .route("/products", get(list_products::<R>))
        .route("/products/{id}", get(get_product::<R>))
        .route("/products/{id}/evaluate", post(evaluate_product::<R>))
        .with_state(shared_service)
}

/// Evaluate a price against the active rates
#[utoipa::path(
    post,
    path = "/evaluate",
    tag = TAG,
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Pricing breakdown", body = PricingBreakdown),
        (status = 400, response = BadRequestValidationResponse),
    )
)]
async fn evaluate<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
    ValidatedJson(request): ValidatedJson<EvaluateRequest>,
) -> PricingResult<Json<PricingBreakdown>> {
    let breakdown = service.evaluate(&request)?;
    Ok(Json(breakdown))
}

/// Active rate table
#[utoipa::path(
    get,
    path = "/rates",
    tag = TAG,
    responses(
        (status = 200, description = "Current rates", body = RateConfig)
    )
)]
async fn get_rates<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
) -> Json<RateConfig> {
    Json(service.rates().as_ref().clone())
}

/// Replace the rate table. Omitted rates take their default values.
#[utoipa::path(
    put,
    path = "/rates",
    tag = TAG,
    request_body = RateConfig,
    responses(
        (status = 200, description = "Rates updated", body = RateConfig),
        (status = 400, response = BadRequestRateResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_rates<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
    JsonBody(rates): JsonBody<RateConfig>,
) -> PricingResult<Json<RateConfig>> {
    let rates = service.update_rates(rates).await?;
    Ok(Json(rates.as_ref().clone()))
}

/// Set the commission rate of one tier
#[utoipa::path(
    put,
    path = "/rates/tiers/{tier}",
    tag = TAG,
    params(
        ("tier" = ProductTier, Path, description = "Product tier")
    ),
    request_body = TierRateUpdate,
    responses(
        (status = 200, description = "Rates updated", body = RateConfig),
        (status = 400, response = BadRequestRateResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn set_tier_rate<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
    ParsedPath(tier): ParsedPath<ProductTier>,
    JsonBody(update): JsonBody<TierRateUpdate>,
) -> PricingResult<Json<RateConfig>> {
    let rates = service.set_tier_commission(tier, update.rate).await?;
    Ok(Json(rates.as_ref().clone()))
}

/// Restore the default rates
#[utoipa::path(
    post,
    path = "/rates/reset",
    tag = TAG,
    responses(
        (status = 200, description = "Defaults restored", body = RateConfig),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn reset_rates<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
) -> PricingResult<Json<RateConfig>> {
    let rates = service.reset_rates().await?;
    Ok(Json(rates.as_ref().clone()))
}

/// Product tiers with labels and commissions
#[utoipa::path(
    get,
    path = "/tiers",
    tag = TAG,
    responses(
        (status = 200, description = "Product tiers", body = Vec<TierOption>)
    )
)]
async fn list_tiers<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
) -> Json<Vec<TierOption>> {
    Json(service.tiers())
}

/// Sales channels with labels and deduction items
#[utoipa::path(
    get,
    path = "/channels",
    tag = TAG,
    responses(
        (status = 200, description = "Sales channels", body = Vec<ChannelOption>)
    )
)]
async fn list_channels<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
) -> Json<Vec<ChannelOption>> {
    Json(service.channels())
}

#[utoipa::path(
    get,
    path = "/products",
    tag = TAG,
    responses(
        (status = 200, description = "Product catalog", body = Vec<Product>)
    )
)]
async fn list_products<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
) -> Json<Vec<Product>> {
    Json(service.products().to_vec())
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product id (model code slug)")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
    Path(id): Path<String>,
) -> PricingResult<Json<Product>> {
    let product = service.product(&id)?.clone();
    Ok(Json(product))
}

/// Evaluate a catalog product at its list price
#[utoipa::path(
    post,
    path = "/products/{id}/evaluate",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product id (model code slug)")
    ),
    request_body = ProductEvaluateRequest,
    responses(
        (status = 200, description = "Product breakdown", body = ProductEvaluation),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn evaluate_product<R: RateRepository>(
    State(service): State<Arc<PricingService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ProductEvaluateRequest>,
) -> PricingResult<Json<ProductEvaluation>> {
    let evaluation = service.evaluate_product(&id, &request)?;
    Ok(Json(evaluation))
}
