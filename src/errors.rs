use thiserror::Error;

/// Rejections raised before the summarizer runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Text content is required and must be a non-empty string")]
    EmptyInput,

    #[error("Text content too long. Maximum {max} characters allowed.")]
    TooLong { max: usize, actual: usize },

    #[error("Text content is required and must be a string")]
    InvalidType,
}

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to process upload: {0}")]
    UploadError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Remote API returned {status}: {message}")]
    RemoteError { status: u16, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for NoteError {
    fn from(error: reqwest::Error) -> Self {
        NoteError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for NoteError {
    fn from(error: serde_json::Error) -> Self {
        NoteError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for NoteError {
    fn from(error: anyhow::Error) -> Self {
        NoteError::Internal(error.to_string())
    }
}
