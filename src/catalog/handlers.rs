//! REST API handlers for catalog lookups
//!
//! Zone listing feeds the storefront's zone selector, so it only returns
//! zones currently offered.

use super::{
    models::{DeliveryZone, ProductDimensions},
    store::{ProductCatalog, ZoneRegistry},
};
use crate::{
    error::{ApiError, ApiResult},
    quote::state::SharedState,
    response::DataResponse,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog lookups
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/zones", get(list_zones))
        .route("/zones/:id", get(get_zone))
        .route("/products/:id", get(get_product))
}

/// Endpoint: GET /zones
async fn list_zones(State(state): State<SharedState>) -> Json<DataResponse<Vec<DeliveryZone>>> {
    Json(DataResponse::new(state.catalog.active_zones()))
}

/// Endpoint: GET /zones/:id
async fn get_zone(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DataResponse<DeliveryZone>>> {
    let zone = state.catalog.zone(id).ok_or(ApiError::ZoneNotFound(id))?;
    Ok(Json(DataResponse::new(zone)))
}

/// Endpoint: GET /products/:id
async fn get_product(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DataResponse<ProductDimensions>>> {
    let product = state
        .catalog
        .product(id)
        .ok_or(ApiError::ProductNotFound(id))?;
    Ok(Json(DataResponse::new(product)))
}
