//! Delivery Quote Library
//!
//! This library prices marketplace carts for delivery: total weight, total
//! volume and a delivery cost from the selected zone's tariff. It also carries
//! the HTTP and MCP surfaces that expose the calculation.

// Domain modules
pub mod catalog;
pub mod mcp;
pub mod quote;

// Infrastructure
pub mod config;
pub mod context;
pub mod error;
pub mod response;
pub mod router;
