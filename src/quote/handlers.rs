//! REST API handlers for delivery quotes

use super::{
    models::{CalculateQuoteInput, QuoteCalculation},
    service::quote_for_request,
    state::SharedState,
};
use crate::{
    context::RequestContext,
    error::{ApiError, ApiResult},
    response::DataResponse,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

/// Creates routes for quote operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/quotes/calculate", post(calculate_quote))
}

/// Endpoint: POST /quotes/calculate
/// Prices the submitted cart against the selected delivery zone.
async fn calculate_quote(
    State(state): State<SharedState>,
    ctx: RequestContext,
    body: Result<Json<CalculateQuoteInput>, JsonRejection>,
) -> ApiResult<Json<DataResponse<QuoteCalculation>>> {
    let Json(input) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let quote = quote_for_request(state.catalog.as_ref(), &ctx, &input)?;
    Ok(Json(DataResponse::new(quote)))
}
