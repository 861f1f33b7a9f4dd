//! Delivery Quote Domain Module
//!
//! This module contains everything needed to price a cart for delivery:
//! - Quote models (inputs, line items, results)
//! - The pure calculator
//! - The service that resolves requests through the catalog
//! - Application state and REST API handlers

pub mod calculator;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod service;
pub mod state;

// Re-export commonly used types for convenience
pub use calculator::calculate;
pub use handlers::routes;
pub use state::{AppState, SharedState};
