//! Quote Service
//!
//! Turns a `{ delivery_zone_id, items }` request into a quote: validates it,
//! resolves the zone and products through the catalog, then runs the
//! calculator. Lookup failures stop here so the calculator only ever sees
//! fully resolved input.

use super::{
    calculator::calculate,
    helpers::format_quote_summary,
    models::{CalculateQuoteInput, LineItem, QuoteCalculation},
};
use crate::{
    catalog::store::{ProductCatalog, ZoneRegistry},
    context::RequestContext,
    error::{ApiError, ApiResult},
};

/// Validates, resolves and prices a quote request.
pub fn quote_for_request<C>(
    catalog: &C,
    ctx: &RequestContext,
    input: &CalculateQuoteInput,
) -> ApiResult<QuoteCalculation>
where
    C: ProductCatalog + ZoneRegistry + ?Sized,
{
    validate_input(input)?;

    let zone = catalog
        .zone(input.delivery_zone_id)
        .ok_or(ApiError::ZoneNotFound(input.delivery_zone_id))?;
    if !zone.is_active {
        return Err(ApiError::ZoneInactive(zone.id));
    }

    let line_items = input
        .items
        .iter()
        .map(|item| {
            catalog
                .product(item.product_id)
                .map(|product| LineItem::new(product, item.quantity))
                .ok_or(ApiError::ProductUnavailable(item.product_id))
        })
        .collect::<ApiResult<Vec<_>>>()
        .map_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, error = %e, "quote lookup failed");
            e
        })?;

    let quote = calculate(&zone, &line_items);

    tracing::info!(
        request_id = %ctx.request_id,
        authenticated = ctx.is_authenticated(),
        zone_id = zone.id,
        lines = quote.items.len(),
        total_amount = quote.total_amount,
        "quote calculated: {}",
        format_quote_summary(&quote)
    );

    Ok(quote)
}

/// Rejects input the calculator should never see.
fn validate_input(input: &CalculateQuoteInput) -> ApiResult<()> {
    if let Some(item) = input.items.iter().find(|item| item.quantity == 0) {
        return Err(ApiError::Validation(format!(
            "quantity for product {} must be at least 1",
            item.product_id
        )));
    }
    Ok(())
}
