//! Handler tests for the pricing domain
//!
//! These exercise the domain router alone (no CORS, docs or metrics layers):
//! - Request deserialization and validation
//! - Response serialization (decimals as strings, camelCase keys)
//! - HTTP status codes and error bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_pricing::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(Arc::new(PricingService::new(InMemoryRateRepository::new())))
}

fn dec(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal encoded as string")).unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_evaluate_normal_channel_reports_loss() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/evaluate",
            json!({
                "originalPrice": 3699,
                "groupDiscount": 100,
                "tier": "mid_range",
                "channel": "normal"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(dec(&body["subsidyBasePrice"]), Decimal::from_str("3144.15").unwrap());
    assert_eq!(dec(&body["netRate"]), Decimal::from_str("0.025").unwrap());
    assert_eq!(dec(&body["maxPotentialDiscount"]), Decimal::from_str("78.60375").unwrap());
    assert_eq!(dec(&body["groupPrice"]), Decimal::from_str("3044.15").unwrap());
    assert_eq!(dec(&body["actualProfit"]), Decimal::from_str("-21.39625").unwrap());

    let items = body["lineItems"].as_object().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(dec(&items["tierCommission"]), Decimal::from_str("125.766").unwrap());
    assert_eq!(dec(&items["rebateFrameworkFee"]), Decimal::from_str("-78.60375").unwrap());
}

#[tokio::test]
async fn test_evaluate_defaults_missing_discount_to_zero() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/evaluate",
            json!({
                "originalPrice": "3699",
                "tier": "mid_range",
                "channel": "cps_external"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(dec(&body["groupPrice"]), Decimal::from_str("3144.15").unwrap());
    assert_eq!(dec(&body["actualProfit"]), Decimal::from_str("135.19845").unwrap());
}

#[tokio::test]
async fn test_evaluate_rejects_negative_price() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/evaluate",
            json!({ "originalPrice": -10, "tier": "ordinary", "channel": "normal" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["original_price"].is_array());
}

#[tokio::test]
async fn test_evaluate_rejects_unknown_channel() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/evaluate",
            json!({ "originalPrice": 1000, "tier": "ordinary", "channel": "wholesale" }),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_get_rates_returns_defaults() {
    let response = app().oneshot(get("/rates")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(dec(&body["platformBaseDeduction"]), Decimal::new(37, 3));
    assert_eq!(dec(&body["tierCommission"]["high_range"]), Decimal::new(6, 2));
}

#[tokio::test]
async fn test_update_then_read_rates() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/rates",
            json!({ "reducedDeduction": "0.02", "cpsExternalCommission": "0.04" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/evaluate",
            json!({ "originalPrice": 3699, "tier": "mid_range", "channel": "cps_external" }),
        ))
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    // 0.006 + 0.02 + 0.04
    assert_eq!(dec(&body["totalDeductionRate"]), Decimal::from_str("0.066").unwrap());
}

#[tokio::test]
async fn test_update_rates_rejects_negative_rate() {
    let response = app()
        .oneshot(json_request(
            "PUT",
            "/rates",
            json!({ "subsidyPlatformFee": "-0.053" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_RATE");
    assert_eq!(body["details"]["rate"], "subsidyPlatformFee");
}

#[tokio::test]
async fn test_huge_price_is_rejected_even_with_high_rates() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/rates", json!({ "transactionServiceFee": "3" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/evaluate",
            json!({
                "originalPrice": "70000000000000000000000000000",
                "tier": "low_wall",
                "channel": "normal"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["original_price"][0]["code"], "max_amount");
}

#[tokio::test]
async fn test_update_rates_rejects_rate_above_ceiling() {
    let response = app()
        .oneshot(json_request(
            "PUT",
            "/rates",
            json!({ "transactionServiceFee": "100000000000000000000" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_RATE");
    assert_eq!(body["details"]["rate"], "transactionServiceFee");
}

#[tokio::test]
async fn test_update_rates_malformed_body_returns_error_json() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/rates")
                .header("content-type", "application/json")
                .body(Body::from("{oops"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_set_tier_rate_unknown_tier_returns_error_json() {
    let response = app()
        .oneshot(json_request("PUT", "/rates/tiers/premium", json!({ "rate": "0.05" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_PATH");
    assert_eq!(body["code"], 1005);
}

#[tokio::test]
async fn test_set_tier_rate() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/rates/tiers/high_range", json!({ "rate": "0.08" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(dec(&body["tierCommission"]["high_range"]), Decimal::new(8, 2));

    let response = app.oneshot(get("/tiers")).await.unwrap();
    let tiers = json_body(response.into_body()).await;
    let high = tiers
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["tier"] == "high_range")
        .unwrap();
    assert_eq!(dec(&high["commission"]), Decimal::new(8, 2));
    assert_eq!(high["label"], "高端机");
}

#[tokio::test]
async fn test_reset_rates() {
    let app = app();

    app.clone()
        .oneshot(json_request("PUT", "/rates/tiers/low_wall", json!({ "rate": 0.5 })))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("POST", "/rates/reset", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(dec(&body["tierCommission"]["low_wall"]), Decimal::new(2, 2));
}

#[tokio::test]
async fn test_list_channels() {
    let response = app().oneshot(get("/channels")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let channels = body.as_array().unwrap();
    assert_eq!(channels.len(), 4);
    assert_eq!(channels[3]["channel"], "cps_external");
    assert_eq!(channels[3]["label"], "CPS (佣金外分)");
    assert_eq!(
        channels[3]["deductions"],
        json!(["transactionFee", "reducedDeduction", "cpsExternalCommission"])
    );
}

#[tokio::test]
async fn test_products_and_product_evaluation() {
    let app = app();

    let response = app.clone().oneshot(get("/products")).await.unwrap();
    let products = json_body(response.into_body()).await;
    assert_eq!(products.as_array().unwrap().len(), 4);

    let response = app
        .clone()
        .oneshot(get("/products/kfr-26gw-nhmb1bg"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product = json_body(response.into_body()).await;
    assert_eq!(product["name"], "云锦Pro26");
    assert_eq!(product["tier"], "mid_range");

    let response = app
        .oneshot(json_request(
            "POST",
            "/products/kfr-26gw-nhmb1bg/evaluate",
            json!({ "channel": "livestream", "groupDiscount": 20 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["channel"], "livestream");
    // 3662 - 549.3
    assert_eq!(
        dec(&body["breakdown"]["subsidyBasePrice"]),
        Decimal::from_str("3112.7").unwrap()
    );
    assert_eq!(
        dec(&body["breakdown"]["groupPrice"]),
        Decimal::from_str("3092.7").unwrap()
    );
}

#[tokio::test]
async fn test_unknown_product_returns_404() {
    let response = app().oneshot(get("/products/kfr-99gw")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["code"], 1003);
}
