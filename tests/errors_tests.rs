use notesum::errors::{InputError, NoteError};
use std::error::Error;

#[test]
fn test_note_error_implements_error_trait() {
    // Verify NoteError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = NoteError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_input_error_display() {
    assert_eq!(
        format!("{}", InputError::EmptyInput),
        "Text content is required and must be a non-empty string"
    );
    assert_eq!(
        format!(
            "{}",
            InputError::TooLong {
                max: 50_000,
                actual: 50_001
            }
        ),
        "Text content too long. Maximum 50000 characters allowed."
    );
}

#[test]
fn test_note_error_display() {
    let error = NoteError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = NoteError::RemoteError {
        status: 400,
        message: "bad text".to_string(),
    };
    assert_eq!(format!("{error}"), "Remote API returned 400: bad text");
}

#[test]
fn test_note_error_from_conversions() {
    // Test conversion from anyhow::Error
    let err = anyhow::anyhow!("test error");
    let note_err: NoteError = err.into();

    match note_err {
        NoteError::Internal(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }

    // Input errors wrap transparently
    let note_err: NoteError = InputError::InvalidType.into();
    assert!(matches!(note_err, NoteError::Input(InputError::InvalidType)));

    // serde_json errors become parse errors
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(NoteError::from(json_err), NoteError::ParseError(_)));

    // Build a reqwest::Error without doing any network I/O.
    let req_err = reqwest::Client::new().get("not a url").build().unwrap_err();
    assert!(matches!(NoteError::from(req_err), NoteError::HttpError(_)));
}
