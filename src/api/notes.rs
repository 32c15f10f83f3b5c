//! `/api/notes/*` handlers: content validation and file upload.

use chrono::Utc;
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::{UploadMetadata, UploadResponse};
use crate::utils::mime::{guess_mime, is_supported_text_upload};
use crate::utils::text::count_words;
use crate::validation::analyze_content;

pub const NO_FILE_MESSAGE: &str = "No file uploaded. Please select a text file to upload.";
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Only text files (.txt, .md, .rtf) are supported";
pub const EMPTY_FILE_MESSAGE: &str = "The uploaded file appears to be empty.";

/// `POST /api/notes/validate`
pub fn handle_validate(config: &AppConfig, payload: &Value) -> Value {
    let body = match parsing::parse_json_body(payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Validate request parse error: {}", e);
            return helpers::err_response(config, 400, &e.to_string());
        }
    };

    let Some(content) = body
        .get("content")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
    else {
        return helpers::err_response(config, 400, "Content is required and must be a string");
    };

    let report = analyze_content(content, config.max_text_chars);
    info!(
        is_valid = report.is_valid,
        word_count = report.word_count,
        "Validated content"
    );
    helpers::json_response(config, 200, &report)
}

/// `POST /api/notes/upload`
pub fn handle_upload(config: &AppConfig, payload: &Value) -> Value {
    match read_upload(config, payload) {
        Ok(upload) => {
            info!(
                filename = %upload.filename,
                file_size = upload.file_size,
                word_count = upload.word_count,
                "Accepted upload"
            );
            helpers::json_response(config, 200, &upload)
        }
        Err(response) => response,
    }
}

fn read_upload(config: &AppConfig, payload: &Value) -> Result<UploadResponse, Value> {
    let boundary = payload
        .get("headers")
        .and_then(|headers| parsing::get_header_value(headers, "Content-Type"))
        .and_then(parsing::boundary_from_content_type)
        .ok_or_else(|| {
            helpers::err_response(config, 400, "Expected a multipart/form-data upload")
        })?;

    let body = parsing::extract_body(payload).map_err(|e| {
        error!("Upload body error: {}", e);
        helpers::err_response(config, 400, &e.to_string())
    })?;

    let parts = parsing::parse_multipart(&body, &boundary).map_err(|e| {
        error!("Multipart parse error: {}", e);
        helpers::err_response(config, 400, &e.to_string())
    })?;

    let Some((filename, file)) = parts
        .into_iter()
        .filter(|part| part.name == "file")
        .find_map(|part| part.filename.clone().map(|name| (name, part)))
    else {
        return Err(helpers::err_response(config, 400, NO_FILE_MESSAGE));
    };

    let file_size = file.data.len();
    if file_size > config.max_upload_bytes {
        return Err(helpers::err_response(
            config,
            413,
            &format!(
                "File too large. Maximum size is {} bytes.",
                config.max_upload_bytes
            ),
        ));
    }

    if !is_supported_text_upload(&filename, file.content_type.as_deref()) {
        return Err(helpers::err_response(config, 400, UNSUPPORTED_TYPE_MESSAGE));
    }

    let text = String::from_utf8(file.data)
        .map_err(|_| helpers::err_response(config, 400, "The uploaded file must be UTF-8 text."))?;

    let content = text.trim();
    if content.is_empty() {
        return Err(helpers::err_response(config, 400, EMPTY_FILE_MESSAGE));
    }

    Ok(UploadResponse {
        content: content.to_string(),
        word_count: count_words(content),
        file_size,
        metadata: UploadMetadata {
            timestamp: Utc::now().to_rfc3339(),
            encoding: "utf-8".to_string(),
            mime_type: guess_mime(&filename),
        },
        filename,
    })
}
