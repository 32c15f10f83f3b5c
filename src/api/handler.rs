//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - CORS preflight
//! - Service banner and health check
//! - Summarization (delegated to `summarize` module)
//! - Content validation and uploads (delegated to `notes` module)

use std::time::Instant;

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use once_cell::sync::Lazy;
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, notes, parsing, summarize};
use crate::core::config::AppConfig;

pub use self::function_handler as handler;

static COLD_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Only configuration errors escape as `Err`; request problems become
/// 4xx responses.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    Ok(route(&config, &event.payload))
}

/// Dispatch a request payload on method and path.
#[must_use]
pub fn route(config: &AppConfig, payload: &Value) -> Value {
    Lazy::force(&COLD_START);

    let method = parsing::request_method(payload);
    let path = parsing::request_path(payload).trim_end_matches('/');
    info!(%method, raw_path = %path, "API Lambda received request");

    if method == "OPTIONS" {
        return helpers::preflight(config);
    }

    match method.as_str() {
        "GET" if path.is_empty() => service_banner(config),
        "GET" if path == "/health" => health(config),
        "POST" if path == "/api/summarize" => summarize::handle_summarize(config, payload),
        "POST" if path == "/api/notes/validate" => notes::handle_validate(config, payload),
        "POST" if path == "/api/notes/upload" => notes::handle_upload(config, payload),
        _ => helpers::err_response(config, 404, "Not found"),
    }
}

// ============================================================================
// Service routes
// ============================================================================

fn service_banner(config: &AppConfig) -> Value {
    helpers::json_response(
        config,
        200,
        &json!({
            "message": "notesum backend",
            "status": "running",
            "endpoints": {
                "summarize": "/api/summarize",
                "upload": "/api/notes/upload",
                "validate": "/api/notes/validate",
                "health": "/health"
            }
        }),
    )
}

fn health(config: &AppConfig) -> Value {
    helpers::json_response(
        config,
        200,
        &json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339(),
            "uptime": COLD_START.elapsed().as_secs_f64()
        }),
    )
}
