//! Response builders for API Gateway / function URL payloads.
//!
//! Every response carries the CORS headers for the configured frontend origin.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::core::config::AppConfig;

// ============================================================================
// Headers
// ============================================================================

#[must_use]
pub fn cors_headers(config: &AppConfig) -> Value {
    json!({
        "Access-Control-Allow-Origin": config.frontend_url,
        "Access-Control-Allow-Credentials": "true",
        "Access-Control-Allow-Methods": "GET,POST,OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
        "Content-Type": "application/json"
    })
}

// ============================================================================
// Response Builders
// ============================================================================

/// Serializes `body` into a response with the given status code.
#[must_use]
pub fn json_response<T: Serialize>(config: &AppConfig, status_code: u16, body: &T) -> Value {
    match serde_json::to_string(body) {
        Ok(body) => json!({
            "statusCode": status_code,
            "headers": cors_headers(config),
            "body": body
        }),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            err_response(config, 500, "Failed to serialize response")
        }
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(config: &AppConfig, status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(config),
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns a 204 answer to a CORS preflight request.
#[must_use]
pub fn preflight(config: &AppConfig) -> Value {
    json!({
        "statusCode": 204,
        "headers": cors_headers(config),
        "body": ""
    })
}
