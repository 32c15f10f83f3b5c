//! notesum - extractive summaries of free-form notes.
//!
//! The crate has two halves:
//! 1. A pure, synchronous summarization engine (`summarizer`) that segments
//!    text into sentences, scores them with hand-tuned heuristics and keeps
//!    the best ones in document order
//! 2. An API Lambda (`api`) that validates requests, calls the engine, and
//!    handles note uploads and content validation
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (`lambda_runtime`) for serverless execution
//! - A function URL / API Gateway payload routed by path
//! - reqwest for the remote client, which degrades to a local fallback
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```
//! use notesum::summarizer::{summarize, LengthPreset};
//!
//! let notes = "The launch slipped by two weeks. Overall the team handled it well. \
//!              Lunch was pizza again. The key result is a stable release.";
//! let summary = summarize(notes, LengthPreset::Medium);
//! assert_eq!(summary, "The key result is a stable release.");
//! ```
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod history;
pub mod summarizer;
pub mod utils;
pub mod validation;

pub use clients::NotesClient;
pub use errors::{InputError, NoteError};
pub use summarizer::{LengthPreset, Sentence, summarize};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at startup.
///
/// # Example
///
/// ```
/// notesum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
