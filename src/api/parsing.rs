use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::errors::NoteError;

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method from a v2 (`requestContext.http.method`) or v1 (`httpMethod`) payload.
#[must_use]
pub fn request_method(payload: &Value) -> String {
    payload
        .get("requestContext")
        .and_then(|ctx| ctx.get("http"))
        .and_then(|http| http.get("method"))
        .and_then(Value::as_str)
        .or_else(|| payload.get("httpMethod").and_then(Value::as_str))
        .unwrap_or("GET")
        .to_ascii_uppercase()
}

/// Request path. A v2 `rawPath` loses its named-stage prefix (`/prod/health`
/// routes as `/health`); `$default` stages carry none.
#[must_use]
pub fn request_path(payload: &Value) -> &str {
    let Some(raw_path) = payload.get("rawPath").and_then(Value::as_str) else {
        return payload.get("path").and_then(Value::as_str).unwrap_or("/");
    };

    let stage = payload
        .get("requestContext")
        .and_then(|ctx| ctx.get("stage"))
        .and_then(Value::as_str)
        .filter(|stage| !stage.is_empty() && *stage != "$default");

    if let Some(stage) = stage
        && let Some(rest) = raw_path.strip_prefix('/').and_then(|p| p.strip_prefix(stage))
    {
        if rest.is_empty() {
            return "/";
        }
        if rest.starts_with('/') {
            return rest;
        }
    }

    raw_path
}

/// Raw request body, decoded when the payload is flagged `isBase64Encoded`.
pub fn extract_body(payload: &Value) -> Result<Vec<u8>, NoteError> {
    let Some(body) = payload.get("body") else {
        return Err(NoteError::ParseError("Missing body".to_string()));
    };

    let Some(body_str) = body.as_str() else {
        return Err(NoteError::ParseError("Invalid body format".to_string()));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_base64 {
        STANDARD
            .decode(body_str)
            .map_err(|e| NoteError::ParseError(format!("Invalid base64 body: {e}")))
    } else {
        Ok(body_str.as_bytes().to_vec())
    }
}

pub fn parse_json_body(payload: &Value) -> Result<Value, NoteError> {
    let body = extract_body(payload)?;
    serde_json::from_slice(&body)
        .map_err(|e| NoteError::ParseError(format!("Invalid JSON body: {e}")))
}

// ============================================================================
// multipart/form-data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Boundary parameter of a `multipart/form-data` content type.
#[must_use]
pub fn boundary_from_content_type(content_type: &str) -> Option<String> {
    let mut params = content_type.split(';');
    let essence = params.next()?.trim();
    if !essence.eq_ignore_ascii_case("multipart/form-data") {
        return None;
    }

    params
        .filter_map(|param| param.trim().split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("boundary"))
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|boundary| !boundary.is_empty())
}

/// Split a `multipart/form-data` body into its parts.
///
/// A delimiter only counts at the start of the body or at the start of a line.
pub fn parse_multipart(body: &[u8], boundary: &str) -> Result<Vec<FormPart>, NoteError> {
    let delimiter = format!("--{boundary}").into_bytes();
    let first = if body.starts_with(&delimiter) {
        Some(0)
    } else {
        find_delimiter_line(body, &delimiter, 0).map(|(_, line_start)| line_start)
    };
    let Some(mut cursor) = first else {
        return Err(NoteError::ParseError(
            "Multipart body does not contain the boundary".to_string(),
        ));
    };

    let mut parts = Vec::new();
    loop {
        let after = cursor + delimiter.len();
        let rest = &body[after..];
        if rest.starts_with(b"--") {
            break;
        }

        let start = after + leading_newline_len(rest);
        let Some((content_end, next)) = find_delimiter_line(body, &delimiter, start) else {
            return Err(NoteError::ParseError(
                "Multipart body is missing its closing boundary".to_string(),
            ));
        };

        parts.push(parse_part(&body[start..content_end])?);
        cursor = next;
    }

    Ok(parts)
}

/// `(content_end, line_start)` of the next delimiter that opens a line at or
/// after `from`. `content_end` excludes the CRLF or LF before it.
fn find_delimiter_line(body: &[u8], delimiter: &[u8], from: usize) -> Option<(usize, usize)> {
    let mut needle = Vec::with_capacity(delimiter.len() + 1);
    needle.push(b'\n');
    needle.extend_from_slice(delimiter);

    let newline = find_subslice(body, &needle, from)?;
    let content_end = if newline > from && body[newline - 1] == b'\r' {
        newline - 1
    } else {
        newline
    };
    Some((content_end, newline + 1))
}

fn parse_part(section: &[u8]) -> Result<FormPart, NoteError> {
    let (header_end, separator_len) = find_subslice(section, b"\r\n\r\n", 0)
        .map(|pos| (pos, 4))
        .or_else(|| find_subslice(section, b"\n\n", 0).map(|pos| (pos, 2)))
        .ok_or_else(|| NoteError::ParseError("Multipart part has no headers".to_string()))?;

    let headers = String::from_utf8_lossy(&section[..header_end]);
    let data = section[header_end + separator_len..].to_vec();

    let mut name = None;
    let mut filename = None;
    let mut content_type = None;

    for line in headers.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.eq_ignore_ascii_case("content-disposition") {
            let (n, f) = parse_content_disposition(value);
            name = n;
            filename = f;
        } else if key.eq_ignore_ascii_case("content-type") {
            content_type = Some(value.trim().to_string());
        }
    }

    let name = name.ok_or_else(|| {
        NoteError::ParseError("Multipart part is missing a field name".to_string())
    })?;

    Ok(FormPart {
        name,
        filename,
        content_type,
        data,
    })
}

/// `(name, filename)` from a `form-data` disposition. An RFC 5987
/// `filename*` takes precedence over a plain `filename`.
fn parse_content_disposition(value: &str) -> (Option<String>, Option<String>) {
    let mut name = None;
    let mut filename = None;
    let mut extended_filename = None;

    for param in value.split(';').skip(1) {
        let Some((key, raw)) = param.trim().split_once('=') else {
            continue;
        };
        let raw = raw.trim().trim_matches('"');
        match key.trim().to_ascii_lowercase().as_str() {
            "name" => name = Some(raw.to_string()),
            "filename" => filename = Some(raw.to_string()),
            "filename*" => {
                let encoded = raw.split_once("''").map_or(raw, |(_, rest)| rest);
                extended_filename = Some(percent_decode_str(encoded).decode_utf8_lossy().into_owned());
            }
            _ => {}
        }
    }

    (name, extended_filename.or(filename))
}

fn find_subslice(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

fn leading_newline_len(bytes: &[u8]) -> usize {
    if bytes.starts_with(b"\r\n") {
        2
    } else if bytes.starts_with(b"\n") {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let headers = json!({ "content-type": "application/json" });
        assert_eq!(
            get_header_value(&headers, "Content-Type"),
            Some("application/json")
        );
    }

    #[test]
    fn method_and_path_from_v2_payload() {
        let payload = json!({
            "rawPath": "/api/summarize",
            "requestContext": { "http": { "method": "post" } }
        });
        assert_eq!(request_method(&payload), "POST");
        assert_eq!(request_path(&payload), "/api/summarize");
    }

    #[test]
    fn named_stage_prefix_is_stripped_from_raw_path() {
        let payload = json!({
            "rawPath": "/prod/api/summarize",
            "requestContext": { "stage": "prod", "http": { "method": "POST" } }
        });
        assert_eq!(request_path(&payload), "/api/summarize");

        let root = json!({ "rawPath": "/prod", "requestContext": { "stage": "prod" } });
        assert_eq!(request_path(&root), "/");

        let similar = json!({ "rawPath": "/production/health", "requestContext": { "stage": "prod" } });
        assert_eq!(request_path(&similar), "/production/health");

        let default_stage = json!({ "rawPath": "/health", "requestContext": { "stage": "$default" } });
        assert_eq!(request_path(&default_stage), "/health");
    }

    #[test]
    fn method_and_path_from_v1_payload() {
        let payload = json!({ "httpMethod": "GET", "path": "/health" });
        assert_eq!(request_method(&payload), "GET");
        assert_eq!(request_path(&payload), "/health");
    }

    #[test]
    fn decodes_base64_body() {
        let payload = json!({ "body": "aGVsbG8=", "isBase64Encoded": true });
        assert_eq!(extract_body(&payload).unwrap(), b"hello");
    }

    #[test]
    fn boundary_is_extracted_and_unquoted() {
        assert_eq!(
            boundary_from_content_type("multipart/form-data; boundary=\"abc123\""),
            Some("abc123".to_string())
        );
        assert_eq!(boundary_from_content_type("application/json"), None);
    }

    #[test]
    fn parses_file_and_text_fields() {
        let body = b"--XyZ\r\n\
Content-Disposition: form-data; name=\"note\"\r\n\
\r\n\
hello\r\n\
--XyZ\r\n\
Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\n\
Content-Type: text/plain\r\n\
\r\n\
line one\r\nline two\r\n\
--XyZ--\r\n";

        let parts = parse_multipart(body, "XyZ").unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "note");
        assert_eq!(parts[0].filename, None);
        assert_eq!(parts[0].data, b"hello");
        assert_eq!(parts[1].filename.as_deref(), Some("notes.txt"));
        assert_eq!(parts[1].content_type.as_deref(), Some("text/plain"));
        assert_eq!(parts[1].data, b"line one\r\nline two");
    }

    #[test]
    fn extended_filename_is_percent_decoded() {
        let (name, filename) = parse_content_disposition(
            " form-data; name=\"file\"; filename=\"fallback.txt\"; filename*=UTF-8''r%C3%A9sum%C3%A9.txt",
        );
        assert_eq!(name.as_deref(), Some("file"));
        assert_eq!(filename.as_deref(), Some("résumé.txt"));
    }

    #[test]
    fn boundary_text_inside_a_line_is_content() {
        let body = b"--XyZ\r\n\
Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\n\
\r\n\
see --XyZ-notes for details\r\n\
--XyZ--\r\n";

        let parts = parse_multipart(body, "XyZ").unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].filename.as_deref(), Some("notes.txt"));
        assert_eq!(parts[0].data, b"see --XyZ-notes for details");
    }

    #[test]
    fn preamble_before_first_delimiter_is_skipped() {
        let body = b"ignored preamble\n--XyZ\n\
Content-Disposition: form-data; name=\"note\"\n\
\n\
hello\n\
--XyZ--\n";

        let parts = parse_multipart(body, "XyZ").unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].data, b"hello");
    }

    #[test]
    fn unterminated_multipart_is_an_error() {
        let body = b"--XyZ\r\nContent-Disposition: form-data; name=\"file\"\r\n\r\ndata";
        assert!(parse_multipart(body, "XyZ").is_err());
    }
}
