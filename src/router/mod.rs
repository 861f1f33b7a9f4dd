//! Routing module for the delivery quote service

use crate::{
    context::{new_request_id, REQUEST_ID_HEADER},
    error::ApiError,
    quote::state::SharedState,
};
use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .merge(crate::quote::routes())
        .merge(crate::catalog::routes())
        .merge(crate::mcp::routes());

    with_middleware(routes, state)
}

/// Wraps `routes` in the service middleware stack and binds the state.
pub fn with_middleware(routes: Router<SharedState>, state: SharedState) -> Router {
    // Middleware: bound request handling time; expiry answers 408
    let timeout_layer = TimeoutLayer::new(state.config.request_timeout);

    // Middleware: give the bare 408 from the timeout layer the error envelope
    let timeout_envelope_layer = axum::middleware::from_fn(render_timeout);

    // Middleware: tag every request with an id, log it, echo the id back
    let log_layer = axum::middleware::from_fn(log_request);

    // Middleware: CORS (storefront and dashboard are served from other origins)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(timeout_layer)
        .layer(timeout_envelope_layer)
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

async fn log_request(mut req: Request<Body>, next: Next) -> Response {
    let request_id = match req
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|v| !v.is_empty())
    {
        Some(existing) => existing.clone(),
        None => {
            let generated = HeaderValue::from_str(&new_request_id())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            req.headers_mut().insert(REQUEST_ID_HEADER, generated.clone());
            generated
        }
    };

    let method = req.method().clone();
    let uri = req.uri().clone();
    let id = request_id.to_str().unwrap_or("").to_owned();
    tracing::info!(request_id = %id, %method, %uri, "request");

    let mut res = next.run(req).await;
    let status = res.status().as_u16();
    if res.status().is_success() {
        tracing::debug!(request_id = %id, status, "response");
    } else {
        tracing::warn!(request_id = %id, status, %method, %uri, "request failed");
    }
    res.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    res
}

/// Handlers never answer 408 themselves, so a 408 without a content type is
/// the timeout layer's empty response.
async fn render_timeout(req: Request<Body>, next: Next) -> Response {
    let res = next.run(req).await;
    if res.status() == StatusCode::REQUEST_TIMEOUT && !res.headers().contains_key(CONTENT_TYPE) {
        return ApiError::Timeout.into_response();
    }
    res
}

/// Endpoint: GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
