//! MIME utilities for note uploads

use std::path::Path;

/// File extensions accepted by the upload endpoint.
pub const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &["txt", "md", "rtf"];

/// Lowercased type without parameters, e.g. `text/plain; charset=utf-8` -> `text/plain`.
#[must_use]
pub fn canonicalize_mime(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Lowercased extension of `filename`, if any.
#[must_use]
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Returns whether an upload is accepted as a text note: a known extension,
/// or a declared `text/plain` content type.
#[must_use]
pub fn is_supported_text_upload(filename: &str, declared_mime: Option<&str>) -> bool {
    let ext_ok = extension_of(filename)
        .is_some_and(|ext| ALLOWED_UPLOAD_EXTENSIONS.contains(&ext.as_str()));
    let mime_ok = declared_mime.is_some_and(|m| canonicalize_mime(m) == "text/plain");
    ext_ok || mime_ok
}

/// Best guess of the MIME type from the file name.
#[must_use]
pub fn guess_mime(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        assert!(is_supported_text_upload("notes.TXT", None));
        assert!(is_supported_text_upload("readme.md", None));
        assert!(is_supported_text_upload("letter.rtf", None));
    }

    #[test]
    fn accepts_declared_plain_text() {
        assert!(is_supported_text_upload(
            "transcript",
            Some("text/plain; charset=utf-8")
        ));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!is_supported_text_upload("slides.pdf", Some("application/pdf")));
        assert!(!is_supported_text_upload("archive", None));
    }

    #[test]
    fn guesses_plain_text_for_txt() {
        assert_eq!(guess_mime("notes.txt"), "text/plain");
        assert_eq!(guess_mime("blob"), "application/octet-stream");
    }
}
