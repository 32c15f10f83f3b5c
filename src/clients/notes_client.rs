//! HTTP client for a remote notesum deployment.
//!
//! Mirrors what the browser frontend does: summaries degrade to the local
//! fallback summarizer when the API cannot be reached, while uploads and
//! validation surface their errors to the caller.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::{SummarizeRequest, SummarizeResponse, UploadResponse, ValidationReport};
use crate::errors::NoteError;
use crate::summarizer::{LengthPreset, fallback_summarize};
use crate::utils::mime::guess_mime;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: usize = 2;

pub struct NotesClient {
    http: Client,
    base_url: Url,
}

impl NotesClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, NoteError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| NoteError::HttpError(format!("Invalid API base URL {base_url}: {e}")))?;

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NoteError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// # Errors
    ///
    /// See [`NotesClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, NoteError> {
        Self::new(&config.api_base_url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, NoteError> {
        self.base_url
            .join(path)
            .map_err(|e| NoteError::HttpError(format!("Invalid endpoint {path}: {e}")))
    }

    /// Summarize via the API, falling back to the local summarizer on any failure.
    pub async fn summarize(&self, text: &str, preset: LengthPreset) -> String {
        match self.request_summary(text, preset).await {
            Ok(response) => response.summary,
            Err(e) => {
                warn!("Summarization API error, falling back to local summarization: {}", e);
                fallback_summarize(text, preset)
            }
        }
    }

    /// Full API response for a summary request. Transport failures are
    /// retried with backoff; HTTP error statuses are not.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn request_summary(
        &self,
        text: &str,
        preset: LengthPreset,
    ) -> Result<SummarizeResponse, NoteError> {
        let url = self.endpoint("/api/summarize")?;
        let body = SummarizeRequest {
            text,
            length: preset,
        };

        let strategy = ExponentialBackoff::from_millis(50)
            .map(jitter)
            .take(MAX_RETRIES);

        RetryIf::spawn(
            strategy,
            || {
                let request = self.http.post(url.clone()).json(&body);
                async move {
                    let response = request.send().await?;
                    read_json::<SummarizeResponse>(response).await
                }
            },
            |e: &NoteError| matches!(e, NoteError::HttpError(_)),
        )
        .await
    }

    /// Upload a note file and return its extracted content.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the file.
    pub async fn upload_file(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, NoteError> {
        let url = self.endpoint("/api/notes/upload")?;
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(&guess_mime(filename))?;
        let form = Form::new().part("file", part);

        info!(filename = %filename, "Uploading note file");
        let response = self.http.post(url).multipart(form).send().await?;
        read_json(response).await
    }

    /// Ask the API for advisory counts and suggestions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the content.
    pub async fn validate_content(&self, content: &str) -> Result<ValidationReport, NoteError> {
        let url = self.endpoint("/api/notes/validate")?;
        let response = self
            .http
            .post(url)
            .json(&json!({ "content": content }))
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, NoteError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        return Err(NoteError::RemoteError {
            status: status.as_u16(),
            message,
        });
    }

    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
