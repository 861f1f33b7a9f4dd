//! Delivery Quote Models
//!
//! Request, line item and result shapes for quote calculation.

use crate::catalog::models::{DeliveryZone, ProductDimensions};
use serde::{Deserialize, Serialize};

// =============================================================================
// Inputs
// =============================================================================

/// Returns the default quantity (1) for quote items
fn default_quantity() -> u32 {
    1
}

/// One cart entry as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteItemInput {
    pub product_id: i64,

    /// Quantity of this product (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Body of `POST /quotes/calculate` and arguments of the quote tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculateQuoteInput {
    pub delivery_zone_id: i64,

    #[serde(default)]
    pub items: Vec<QuoteItemInput>,
}

/// A cart entry whose product has already been resolved by the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: ProductDimensions,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product: ProductDimensions, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// Per-line breakdown, unit values only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLine {
    pub product_id: i64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub unit_weight_kg: f64,
    pub unit_volume_m3: f64,
}

/// Result of a quote calculation. Computed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteCalculation {
    /// The zone the quote was priced against
    pub zone: DeliveryZone,

    /// Breakdown in the same order as the input items
    pub items: Vec<QuoteLine>,

    pub subtotal_products: f64,
    pub total_weight_kg: f64,
    pub total_volume_m3: f64,
    pub delivery_cost: f64,
    pub total_amount: f64,
}
