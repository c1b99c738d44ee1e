//! Response body decoding.
//!
//! Internet.bs answers with a JSON object when `ResponseFormat=JSON` is
//! honoured, and with newline-delimited `key=value` text otherwise. Both are
//! decoded into the same [`Fields`] map; the JSON decoder is tried first.

use serde_json::{Map, Value};

use crate::clients::errors::DecodeError;

/// Decoded response fields.
pub type Fields = Map<String, Value>;

/// Which decoder produced a [`Fields`] map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyFormat {
    /// The body was a JSON object.
    Json,
    /// The body was `key=value` text.
    KeyValue,
}

/// Parses `body` as a JSON object.
///
/// Returns `None` for invalid JSON and for JSON that is not an object.
#[must_use]
pub fn parse_json_object(body: &str) -> Option<Fields> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Parses newline-delimited `key=value` text.
///
/// Each non-blank line is split on its first `=` and both halves are
/// trimmed. Lines without `=`, and lines whose key is not a plain field
/// name (ASCII letters, digits, `_`, `.` or `-`), are skipped. Returns
/// `None` if no pair was found at all.
///
/// # Example
///
/// ```rust
/// use internetbs_api::clients::decode::parse_key_value;
///
/// let fields = parse_key_value("status=SUCCESS\nproduct_0_status=SUCCESS\n").unwrap();
/// assert_eq!(fields["status"], "SUCCESS");
/// assert_eq!(fields["product_0_status"], "SUCCESS");
/// ```
#[must_use]
pub fn parse_key_value(body: &str) -> Option<Fields> {
    let mut fields = Fields::new();

    // `lines` handles "\n" and "\r\n"; a lone "\r" is split separately.
    for line in body.lines().flat_map(|line| line.split('\r')) {
        if line.trim().is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if is_field_name(key) {
                fields.insert(key.to_string(), Value::String(value.trim().to_string()));
            }
        }
    }

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

fn is_field_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
}

/// Decodes a response body, trying JSON first and `key=value` second.
///
/// A body that looks like JSON (starts with `{` or `[`) but does not parse
/// is never handed to the `key=value` decoder.
///
/// # Errors
///
/// Returns [`DecodeError`] if neither decoder accepts the body.
pub fn decode_body(body: &str) -> Result<(Fields, BodyFormat), DecodeError> {
    if let Some(fields) = parse_json_object(body) {
        return Ok((fields, BodyFormat::Json));
    }
    let looks_like_json = body.trim_start().starts_with(['{', '[']);
    if !looks_like_json {
        if let Some(fields) = parse_key_value(body) {
            return Ok((fields, BodyFormat::KeyValue));
        }
    }
    Err(DecodeError::from_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_value_matches_equivalent_json() {
        let (from_text, text_format) =
            decode_body("status=SUCCESS\nproduct_0_status=SUCCESS\n").unwrap();
        let (from_json, json_format) =
            decode_body(r#"{"status":"SUCCESS","product_0_status":"SUCCESS"}"#).unwrap();

        assert_eq!(text_format, BodyFormat::KeyValue);
        assert_eq!(json_format, BodyFormat::Json);
        assert_eq!(from_text, from_json);
    }

    #[test]
    fn test_key_value_splits_on_first_equals_only() {
        let fields = parse_key_value("url=https://example.com/?a=b").unwrap();
        assert_eq!(fields["url"], "https://example.com/?a=b");
    }

    #[test]
    fn test_key_value_trims_and_skips_blank_lines() {
        let fields = parse_key_value("\r\n  status = PENDING \r\n\r\n\ttransactid=abc\r").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["status"], "PENDING");
        assert_eq!(fields["transactid"], "abc");
    }

    #[test]
    fn test_key_value_handles_bare_carriage_returns() {
        let fields = parse_key_value("status=SUCCESS\rcurrency=USD").unwrap();
        assert_eq!(fields["currency"], "USD");
    }

    #[test]
    fn test_key_value_skips_lines_without_separator() {
        let fields = parse_key_value("garbage line\nstatus=SUCCESS").unwrap();
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_json_keeps_nested_values() {
        let fields = parse_json_object(
            r#"{"status":"SUCCESS","domain":["a.com","b.com"],"domaincount":2}"#,
        )
        .unwrap();
        assert_eq!(fields["domain"], json!(["a.com", "b.com"]));
        assert_eq!(fields["domaincount"], json!(2));
    }

    #[test]
    fn test_json_array_is_not_an_object() {
        assert!(parse_json_object("[1, 2, 3]").is_none());
        assert!(parse_json_object("\"SUCCESS\"").is_none());
    }

    #[test]
    fn test_truncated_json_failure_is_not_read_as_key_value() {
        let body = r#"{"status":"FAILURE","message":"Period=2Y invalid""#;

        let error = decode_body(body).unwrap_err();
        assert!(error.excerpt.contains("FAILURE"));
        assert!(decode_body("  [\"status=FAILURE\"").is_err());
    }

    #[test]
    fn test_html_page_with_attributes_is_undecodable() {
        let body = "<!DOCTYPE html>\n<html lang=\"en\">\n<body class=\"error\">\
                    Service unavailable</body>\n</html>";

        assert!(parse_key_value(body).is_none());
        assert!(decode_body(body).is_err());
    }

    #[test]
    fn test_key_value_skips_lines_with_non_field_keys() {
        let fields = parse_key_value(
            "<meta charset=utf-8>\nstatus=SUCCESS\nip_list.0=192.0.2.1\n=orphan",
        )
        .unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["status"], "SUCCESS");
        assert_eq!(fields["ip_list.0"], "192.0.2.1");
    }

    #[test]
    fn test_undecodable_body_is_classified() {
        let error = decode_body("<html>Bad Gateway</html>").unwrap_err();
        assert!(error.excerpt.contains("Bad Gateway"));

        assert!(decode_body("").is_err());
        assert!(decode_body("[1, 2]").is_err());
    }
}
