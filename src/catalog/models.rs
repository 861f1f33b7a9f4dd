//! Catalog Domain Models
//!
//! Products and delivery zones as the rest of the service sees them, plus the
//! raw record shape they are ingested from.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Cubic centimeters per cubic meter
pub const CM3_PER_M3: f64 = 1_000_000.0;

// =============================================================================
// Product Models
// =============================================================================

/// A product as it arrives from the catalog source.
///
/// Physical dimensions are frequently missing in the source data, so each one
/// is optional here. Call [`ProductRecord::normalize`] before handing the
/// product to anything that computes with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,

    /// Unit price in the catalog's currency unit
    pub price: f64,

    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub length_cm: Option<f64>,
    #[serde(default)]
    pub width_cm: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
}

impl ProductRecord {
    /// Produces fully-defaulted dimensions: every absent measurement becomes 0.
    ///
    /// This is the only place defaults are applied. The price is taken as-is.
    pub fn normalize(self) -> ProductDimensions {
        ProductDimensions {
            id: self.id,
            name: self.name,
            price: self.price,
            weight_kg: self.weight_kg.unwrap_or(0.0),
            length_cm: self.length_cm.unwrap_or(0.0),
            width_cm: self.width_cm.unwrap_or(0.0),
            height_cm: self.height_cm.unwrap_or(0.0),
        }
    }
}

/// A product with every physical dimension present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDimensions {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl ProductDimensions {
    /// Unit volume in cubic meters
    pub fn volume_m3(&self) -> f64 {
        (self.length_cm * self.width_cm * self.height_cm) / CM3_PER_M3
    }
}

// =============================================================================
// Delivery Zone Models
// =============================================================================

/// Zones are offered for selection unless explicitly switched off
fn default_active() -> bool {
    true
}

/// A named shipping tariff scoped to a city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryZone {
    pub id: i64,
    pub name: String,

    /// Display-only relation to a city
    pub city_id: i64,

    /// Flat charge applied once per quote
    pub base_price: f64,
    pub price_per_kg: f64,
    pub price_per_m3: f64,

    /// Advisory shipment caps; quotes are not checked against them
    #[serde(default)]
    pub max_weight_kg: Option<f64>,
    #[serde(default)]
    pub max_volume_m3: Option<f64>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl DeliveryZone {
    pub fn tariff(&self) -> Tariff {
        Tariff {
            base_price: self.base_price,
            price_per_kg: self.price_per_kg,
            price_per_m3: self.price_per_m3,
        }
    }
}

/// The pricing triple of a zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    pub base_price: f64,
    pub price_per_kg: f64,
    pub price_per_m3: f64,
}

impl Tariff {
    /// Linear delivery cost for a shipment of the given totals.
    pub fn delivery_cost(&self, total_weight_kg: f64, total_volume_m3: f64) -> f64 {
        self.base_price + self.price_per_kg * total_weight_kg + self.price_per_m3 * total_volume_m3
    }
}

// =============================================================================
// Seed File
// =============================================================================

/// On-disk catalog snapshot: `{ "products": [...], "zones": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub zones: Vec<DeliveryZone>,
}
