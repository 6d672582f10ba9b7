//! Reusable OpenAPI response types.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1100,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "original_price": [{
                "code": "non_negative",
                "message": "must not be negative",
                "params": {"value": "-1"}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Rejected Rate",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "INVALID_RATE",
        "message": "Invalid rate 'reducedDeduction': must not be negative"
    })
)]
pub struct BadRequestRateResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1003,
        "error": "NOT_FOUND",
        "message": "Product not found: kfr-99gw"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
