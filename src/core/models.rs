use serde::{Deserialize, Serialize};

use crate::summarizer::LengthPreset;

/// Body sent by `NotesClient` to `POST /api/summarize`.
#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    pub text: &'a str,
    pub length: LengthPreset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    pub compression_ratio: f64,
    pub metadata: SummaryMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetadata {
    pub timestamp: String,
    pub length: LengthPreset,
    /// Milliseconds spent in the engine.
    pub processing_time: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub word_count: usize,
    pub character_count: usize,
    /// Minutes, rounded up.
    pub estimated_reading_time: usize,
    pub suggestions: Vec<String>,
    pub metadata: ValidationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMetadata {
    pub sentence_count: usize,
    pub avg_words_per_sentence: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub content: String,
    pub filename: String,
    pub word_count: usize,
    pub file_size: usize,
    pub metadata: UploadMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub timestamp: String,
    pub encoding: String,
    pub mime_type: String,
}
