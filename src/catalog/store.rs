//! Catalog Storage
//!
//! Lookup traits the quote service depends on, and the in-memory store that
//! backs them in this service.

use super::models::{CatalogSeed, DeliveryZone, ProductDimensions, ProductRecord};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Lookup Traits
// =============================================================================

/// Resolves product ids to normalized products.
pub trait ProductCatalog: Send + Sync {
    fn product(&self, id: i64) -> Option<ProductDimensions>;
}

/// Resolves delivery zones and lists the ones open for selection.
pub trait ZoneRegistry: Send + Sync {
    fn zone(&self, id: i64) -> Option<DeliveryZone>;

    /// Active zones only, ordered by id
    fn active_zones(&self) -> Vec<DeliveryZone>;
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog seed {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog seed {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// Products and zones keyed by id.
/// DashMap allows concurrent reads from request tasks without an outer lock.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: DashMap<i64, ProductDimensions>,
    zones: DashMap<i64, DeliveryZone>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a seed, normalizing every product on the way in.
    pub fn from_seed(seed: CatalogSeed) -> Self {
        let catalog = Self::new();
        for record in seed.products {
            catalog.insert_product(record);
        }
        for zone in seed.zones {
            catalog.insert_zone(zone);
        }
        catalog
    }

    /// Loads a JSON seed file.
    ///
    /// A missing file yields an empty catalog so the service can still start;
    /// a file that exists but cannot be read or parsed is an error.
    pub async fn load_seed(path: &Path) -> Result<Self, CatalogError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = ?path, "catalog seed not found, starting empty");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(CatalogError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let seed: CatalogSeed =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_seed(seed);
        tracing::info!(
            path = ?path,
            products = catalog.product_count(),
            zones = catalog.zone_count(),
            "catalog seed loaded"
        );
        Ok(catalog)
    }

    /// Inserts or replaces a product.
    pub fn insert_product(&self, record: ProductRecord) {
        let product = record.normalize();
        self.products.insert(product.id, product);
    }

    /// Inserts or replaces a zone.
    pub fn insert_zone(&self, zone: DeliveryZone) {
        self.zones.insert(zone.id, zone);
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn product(&self, id: i64) -> Option<ProductDimensions> {
        self.products.get(&id).map(|entry| entry.value().clone())
    }
}

impl ZoneRegistry for InMemoryCatalog {
    fn zone(&self, id: i64) -> Option<DeliveryZone> {
        self.zones.get(&id).map(|entry| entry.value().clone())
    }

    fn active_zones(&self) -> Vec<DeliveryZone> {
        let mut zones: Vec<DeliveryZone> = self
            .zones
            .iter()
            .filter(|entry| entry.is_active)
            .map(|entry| entry.value().clone())
            .collect();
        zones.sort_by_key(|zone| zone.id);
        zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn zone(id: i64, is_active: bool) -> DeliveryZone {
        DeliveryZone {
            id,
            name: format!("Zone {}", id),
            city_id: 1,
            base_price: 1000.0,
            price_per_kg: 500.0,
            price_per_m3: 2_000_000.0,
            max_weight_kg: None,
            max_volume_m3: None,
            is_active,
        }
    }

    #[test]
    fn active_zones_are_filtered_and_sorted() {
        let catalog = InMemoryCatalog::new();
        catalog.insert_zone(zone(3, true));
        catalog.insert_zone(zone(1, true));
        catalog.insert_zone(zone(2, false));

        let ids: Vec<i64> = catalog.active_zones().iter().map(|z| z.id).collect();
        assert_eq!(ids, vec![1, 3]);

        // inactive zones remain resolvable by id
        assert!(catalog.zone(2).is_some());
    }

    #[test]
    fn products_are_normalized_on_insert() {
        let catalog = InMemoryCatalog::new();
        catalog.insert_product(ProductRecord {
            id: 10,
            name: "Rice 5kg".into(),
            price: 3500.0,
            weight_kg: Some(5.0),
            length_cm: None,
            width_cm: None,
            height_cm: None,
        });

        let product = catalog.product(10).unwrap();
        assert_eq!(product.weight_kg, 5.0);
        assert_eq!(product.length_cm, 0.0);
        assert!(catalog.product(11).is_none());
    }

    #[tokio::test]
    async fn load_seed_reads_products_and_zones() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "products": [{{ "id": 1, "name": "Lamp", "price": 5000, "weight_kg": 2 }}],
                "zones": [{{ "id": 4, "name": "Plateau", "city_id": 2,
                            "base_price": 1000, "price_per_kg": 500, "price_per_m3": 0 }}]
            }}"#
        )
        .unwrap();

        let catalog = InMemoryCatalog::load_seed(file.path()).await.unwrap();
        assert_eq!(catalog.product_count(), 1);
        assert_eq!(catalog.zone_count(), 1);
        assert_eq!(catalog.product(1).unwrap().weight_kg, 2.0);
        assert!(catalog.zone(4).unwrap().is_active);
    }

    #[tokio::test]
    async fn load_seed_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = InMemoryCatalog::load_seed(&dir.path().join("absent.json"))
            .await
            .unwrap();
        assert_eq!(catalog.product_count(), 0);
        assert!(catalog.active_zones().is_empty());
    }

    #[tokio::test]
    async fn load_seed_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = InMemoryCatalog::load_seed(file.path()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
