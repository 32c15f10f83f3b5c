use std::time::Instant;

use chrono::Utc;
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::{SummarizeResponse, SummaryMetadata};
use crate::summarizer::{LengthPreset, summarize_with_stats};
use crate::validation::check_summarize_text;

/// `POST /api/summarize`: validate the body, run the engine, report counts.
pub fn handle_summarize(config: &AppConfig, payload: &Value) -> Value {
    let body = match parsing::parse_json_body(payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Summarize request parse error: {}", e);
            return helpers::err_response(config, 400, &e.to_string());
        }
    };

    let text = match check_summarize_text(body.get("text"), config.max_text_chars) {
        Ok(text) => text,
        Err(e) => {
            info!(reason = %e, "Rejected summarize request");
            return helpers::err_response(config, 400, &e.to_string());
        }
    };

    let preset = body
        .get("length")
        .and_then(Value::as_str)
        .map(LengthPreset::from_label)
        .unwrap_or_default();

    let started = Instant::now();
    let report = summarize_with_stats(text, preset);
    let processing_time = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    info!(
        original_words = report.original_word_count,
        summary_words = report.summary_word_count,
        compression_ratio = report.compression_ratio,
        preset = %preset,
        "Generated summary"
    );

    let response = SummarizeResponse {
        summary: report.summary,
        original_word_count: report.original_word_count,
        summary_word_count: report.summary_word_count,
        compression_ratio: report.compression_ratio,
        metadata: SummaryMetadata {
            timestamp: Utc::now().to_rfc3339(),
            length: preset,
            processing_time,
        },
    };

    helpers::json_response(config, 200, &response)
}
