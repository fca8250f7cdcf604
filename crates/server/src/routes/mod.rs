//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the phonebook
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `search`: User directory search

pub mod health;
pub mod search;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Phonebook Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/search",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
