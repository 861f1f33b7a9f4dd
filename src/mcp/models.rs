//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) tool-call surface.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool pricing a cart against a delivery zone
pub const QUOTE_TOOL_NAME: &str = "calculate_delivery_quote";
/// Tool listing selectable delivery zones
pub const ZONES_TOOL_NAME: &str = "list_delivery_zones";
/// Server identifier
pub const SERVER_NAME: &str = "delivery-quote";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// JSON-RPC Error Codes
// =============================================================================

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
