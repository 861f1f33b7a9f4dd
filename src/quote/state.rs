//! Application State
//!
//! Shared state handed to every handler: the catalog and the configuration
//! the service was started with.

use crate::{
    catalog::store::{CatalogError, InMemoryCatalog},
    config::AppConfig,
};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// Product catalog and zone registry
    pub catalog: Arc<InMemoryCatalog>,

    pub config: AppConfig,
}

impl AppState {
    pub fn new(catalog: InMemoryCatalog, config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }

    /// Loads the catalog seed named by `config`.
    pub async fn from_config(config: AppConfig) -> Result<Self, CatalogError> {
        let catalog = InMemoryCatalog::load_seed(&config.seed_path()).await?;
        Ok(Self::new(catalog, config))
    }
}
