//! Catalog Domain Module
//!
//! The external data the quote calculator depends on:
//! - Product and delivery zone models, including raw-record normalization
//! - Lookup traits and the in-memory store behind them
//! - REST API handlers for zone and product lookups

pub mod handlers;
pub mod models;
pub mod store;

pub use handlers::routes;
pub use store::{CatalogError, InMemoryCatalog, ProductCatalog, ZoneRegistry};
