//! Delivery Quote Calculator
//!
//! Prices a shipment against a zone tariff:
//!
//! ```text
//! delivery_cost = base_price
//!               + price_per_kg * total_weight_kg
//!               + price_per_m3 * total_volume_m3
//! total_amount  = subtotal_products + delivery_cost
//! ```
//!
//! Everything here is pure: no I/O, no shared state, no rounding. Callers
//! resolve products and zones first and format numbers for display afterwards.

use super::models::{LineItem, QuoteCalculation, QuoteLine};
use crate::catalog::models::DeliveryZone;

/// Calculates a quote for `line_items` shipped through `zone`.
///
/// Total over its inputs: an empty slice yields a quote whose delivery cost is
/// the zone's base price. The zone's weight and volume caps are not checked.
pub fn calculate(zone: &DeliveryZone, line_items: &[LineItem]) -> QuoteCalculation {
    let mut items = Vec::with_capacity(line_items.len());
    let mut subtotal_products = 0.0;
    let mut total_weight_kg = 0.0;
    let mut total_volume_m3 = 0.0;

    for line in line_items {
        let product = &line.product;
        let quantity = f64::from(line.quantity);
        let unit_volume_m3 = product.volume_m3();

        subtotal_products += product.price * quantity;
        total_weight_kg += product.weight_kg * quantity;
        total_volume_m3 += unit_volume_m3 * quantity;

        items.push(QuoteLine {
            product_id: product.id,
            name: product.name.clone(),
            quantity: line.quantity,
            unit_price: product.price,
            unit_weight_kg: product.weight_kg,
            unit_volume_m3,
        });
    }

    let delivery_cost = zone.tariff().delivery_cost(total_weight_kg, total_volume_m3);

    QuoteCalculation {
        zone: zone.clone(),
        items,
        subtotal_products,
        total_weight_kg,
        total_volume_m3,
        delivery_cost,
        total_amount: subtotal_products + delivery_cost,
    }
}
