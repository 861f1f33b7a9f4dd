//! MCP (Model Context Protocol) route handlers
//!
//! Exposes zone listing and quote calculation as tools over JSON-RPC 2.0.
//! `handle_tool_call` is public so tests can drive tools without HTTP.

use super::{helpers::*, models::*};
use crate::{
    catalog::store::ZoneRegistry,
    context::RequestContext,
    error::ApiError,
    quote::{
        helpers::format_quote_summary, models::CalculateQuoteInput, service::quote_for_request,
        state::AppState, state::SharedState,
    },
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/mcp/", post(handle_mcp)) // Trailing slash safety
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication.
async fn handle_mcp(
    State(state): State<SharedState>,
    ctx: RequestContext,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            let reason = e.body_text();
            tracing::warn!(request_id = %ctx.request_id, error = %reason, "JSON-RPC parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(request_id = %ctx.request_id, method = method_name, id = ?id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, &ctx, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!(request_id = %ctx.request_id, method = method_name, "unknown MCP method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": ZONES_TOOL_NAME,
                "title": "List delivery zones",
                "description": "Lists the delivery zones currently offered, with their tariffs.",
                "inputSchema": {
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                }
            },
            {
                "name": QUOTE_TOOL_NAME,
                "title": "Calculate delivery quote",
                "description": "Prices a cart for delivery to the selected zone: totals, delivery cost and grand total.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "delivery_zone_id": { "type": "integer" },
                        "items": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["product_id"],
                                "properties": {
                                    "product_id": { "type": "integer" },
                                    "quantity": { "type": "integer", "minimum": 1, "default": 1 }
                                }
                            }
                        }
                    },
                    "required": ["delivery_zone_id"],
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request.
pub fn handle_tool_call(
    state: &AppState,
    ctx: &RequestContext,
    name: &str,
    args: Value,
) -> Result<Value, String> {
    match name {
        ZONES_TOOL_NAME => Ok(handle_list_zones_tool(state)),
        QUOTE_TOOL_NAME => handle_quote_tool(state, ctx, args),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

fn handle_list_zones_tool(state: &AppState) -> Value {
    let zones = state.catalog.active_zones();
    let names = zones
        .iter()
        .map(|z| z.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let message = if zones.is_empty() {
        "No delivery zones are currently offered.".to_string()
    } else {
        format!("{} zone(s) available: {}", zones.len(), names)
    };

    tool_result(message, json!({ "zones": zones }))
}

fn handle_quote_tool(state: &AppState, ctx: &RequestContext, args: Value) -> Result<Value, String> {
    let input: CalculateQuoteInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    let quote = quote_for_request(state.catalog.as_ref(), ctx, &input).map_err(|e| e.to_string())?;
    let structured = serde_json::to_value(&quote)
        .map_err(|e| ApiError::Internal(e.to_string()).to_string())?;

    Ok(tool_result(format_quote_summary(&quote), structured))
}
