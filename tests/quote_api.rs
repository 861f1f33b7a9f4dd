//! Integration tests for the delivery quote REST API
//!
//! These tests drive the full router (middleware included) and verify:
//! - Quote calculation over HTTP
//! - Zone and product lookups
//! - Error envelopes and status codes

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use delivery_quote::catalog::models::{DeliveryZone, ProductRecord};
use delivery_quote::catalog::InMemoryCatalog;
use delivery_quote::config::AppConfig;
use delivery_quote::quote::AppState;
use delivery_quote::router::create_app_router;

fn zone(id: i64, name: &str, is_active: bool) -> DeliveryZone {
    DeliveryZone {
        id,
        name: name.into(),
        city_id: 1,
        base_price: 1000.0,
        price_per_kg: 500.0,
        price_per_m3: 2_000_000.0,
        max_weight_kg: Some(30.0),
        max_volume_m3: None,
        is_active,
    }
}

/// Helper function to create a test app instance over a small catalog
fn create_test_app() -> axum::Router {
    let catalog = InMemoryCatalog::new();
    catalog.insert_zone(zone(2, "Almadies", true));
    catalog.insert_zone(zone(1, "Plateau", true));
    catalog.insert_zone(zone(3, "Thies", false));
    catalog.insert_product(ProductRecord {
        id: 1,
        name: "Desk lamp".into(),
        price: 5000.0,
        weight_kg: Some(2.0),
        length_cm: Some(10.0),
        width_cm: Some(10.0),
        height_cm: Some(10.0),
    });
    catalog.insert_product(ProductRecord {
        id: 4,
        name: "Gift card".into(),
        price: 10000.0,
        weight_kg: None,
        length_cm: None,
        width_cm: None,
        height_cm: None,
    });

    let state = Arc::new(AppState::new(catalog, AppConfig::default()));
    create_app_router(state)
}

/// Helper function to send a request and get the JSON response
async fn send_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[tokio::test]
async fn test_calculate_quote() {
    let app = create_test_app();

    let payload = json!({
        "delivery_zone_id": 1,
        "items": [{ "product_id": 1, "quantity": 3 }]
    });
    let (status, body) = send_request(&app, "POST", "/quotes/calculate", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_close(&data["total_weight_kg"], 6.0);
    assert_close(&data["total_volume_m3"], 0.003);
    assert_close(&data["subtotal_products"], 15000.0);
    assert_close(&data["delivery_cost"], 10000.0);
    assert_close(&data["total_amount"], 25000.0);
    assert_eq!(data["zone"]["id"], 1);
    assert_eq!(data["items"][0]["name"], "Desk lamp");
    assert_eq!(data["items"][0]["quantity"], 3);
}

#[tokio::test]
async fn test_calculate_quote_empty_cart() {
    let app = create_test_app();

    let payload = json!({ "delivery_zone_id": 1, "items": [] });
    let (status, body) = send_request(&app, "POST", "/quotes/calculate", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&body["data"]["delivery_cost"], 1000.0);
    assert_close(&body["data"]["total_amount"], 1000.0);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_calculate_quote_preserves_order_and_defaults_quantity() {
    let app = create_test_app();

    let payload = json!({
        "delivery_zone_id": 1,
        "items": [{ "product_id": 4 }, { "product_id": 1, "quantity": 1 }]
    });
    let (status, body) = send_request(&app, "POST", "/quotes/calculate", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items[0]["product_id"], 4);
    assert_eq!(items[0]["quantity"], 1);
    assert_eq!(items[0]["unit_weight_kg"], 0.0);
    assert_eq!(items[1]["product_id"], 1);
    assert_close(&body["data"]["subtotal_products"], 15000.0);
    assert_close(&body["data"]["total_weight_kg"], 2.0);
}

#[tokio::test]
async fn test_calculate_quote_unknown_product() {
    let app = create_test_app();

    let payload = json!({
        "delivery_zone_id": 1,
        "items": [{ "product_id": 1, "quantity": 1 }, { "product_id": 999, "quantity": 1 }]
    });
    let (status, body) = send_request(&app, "POST", "/quotes/calculate", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "quote_unavailable");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_calculate_quote_unknown_zone() {
    let app = create_test_app();

    let payload = json!({ "delivery_zone_id": 42, "items": [] });
    let (status, body) = send_request(&app, "POST", "/quotes/calculate", Some(payload)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "zone_not_found");
}

#[tokio::test]
async fn test_calculate_quote_inactive_zone() {
    let app = create_test_app();

    let payload = json!({ "delivery_zone_id": 3, "items": [] });
    let (status, body) = send_request(&app, "POST", "/quotes/calculate", Some(payload)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "zone_inactive");
}

#[tokio::test]
async fn test_calculate_quote_zero_quantity() {
    let app = create_test_app();

    let payload = json!({
        "delivery_zone_id": 1,
        "items": [{ "product_id": 1, "quantity": 0 }]
    });
    let (status, body) = send_request(&app, "POST", "/quotes/calculate", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn test_calculate_quote_missing_zone_field() {
    let app = create_test_app();

    let (status, body) =
        send_request(&app, "POST", "/quotes/calculate", Some(json!({ "items": [] }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn test_calculate_quote_negative_quantity_rejected() {
    let app = create_test_app();

    let payload = json!({
        "delivery_zone_id": 1,
        "items": [{ "product_id": 1, "quantity": -2 }]
    });
    let (status, _) = send_request(&app, "POST", "/quotes/calculate", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_zones_only_active_sorted() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/zones", None).await;

    assert_eq!(status, StatusCode::OK);
    let zones = body["data"].as_array().unwrap();
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0]["id"], 1);
    assert_eq!(zones[1]["id"], 2);
    assert_eq!(zones[0]["max_weight_kg"], 30.0);
}

#[tokio::test]
async fn test_get_zone_and_product() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/zones/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_active"], false);

    let (status, body) = send_request(&app, "GET", "/products/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["weight_kg"], 0.0);
    assert_eq!(body["data"]["height_cm"], 0.0);

    let (status, body) = send_request(&app, "GET", "/products/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "product_not_found");
}

#[tokio::test]
async fn test_health_and_request_id() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "abc-123");

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
