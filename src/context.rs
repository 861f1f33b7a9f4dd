//! Per-request context
//!
//! Request-scoped values are extracted from headers once and passed down the
//! call tree explicitly, instead of living in global state.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::convert::Infallible;
use uuid::Uuid;

/// Header carrying the request identifier, set by the logging middleware
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Identity of the current request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub request_id: String,

    /// Bearer token supplied by the client, if any. Not validated here.
    pub session_token: Option<String>,
}

impl RequestContext {
    /// Builds a context from request headers, generating a request id when
    /// none was supplied.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(new_request_id);

        let session_token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());

        Self {
            request_id,
            session_token,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token.is_some()
    }
}

/// Returns a fresh request identifier.
pub fn new_request_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
