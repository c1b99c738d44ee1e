//! Decoded Internet.bs responses.

use serde_json::Value;

use crate::clients::decode::Fields;

/// The status sentinel marking a failed call.
pub const FAILURE_STATUS: &str = "FAILURE";

/// Field names that may carry the human-readable message, in lookup order.
const MESSAGE_KEYS: [&str; 3] = ["status_message", "message", "error"];

/// A decoded response from the Internet.bs API.
///
/// Field keys are kept exactly as the API sent them. The convenience
/// accessors for the status and message fields compare key names
/// case-insensitively, since endpoints disagree between `STATUS` and
/// `status`.
///
/// # Example
///
/// ```rust
/// use internetbs_api::clients::ApiResponse;
/// use serde_json::json;
///
/// let fields = json!({"STATUS": "AVAILABLE", "domain": "example.com"});
/// let response = ApiResponse::new(200, fields.as_object().unwrap().clone());
///
/// assert_eq!(response.status(), Some("AVAILABLE"));
/// assert!(response.status_is("available"));
/// assert!(!response.is_failure());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Every decoded field, unchanged.
    pub fields: Fields,
}

impl ApiResponse {
    /// Wraps decoded fields.
    #[must_use]
    pub const fn new(code: u16, fields: Fields) -> Self {
        Self { code, fields }
    }

    /// Returns the raw value for `key` (exact match).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the value for `key` as text.
    ///
    /// Strings are returned as-is, numbers and booleans are rendered.
    /// Arrays, objects and nulls yield `None`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(value_as_text)
    }

    /// Returns the first value whose key matches `key` ignoring ASCII case.
    #[must_use]
    pub fn get_ignore_case(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).or_else(|| {
            self.fields
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
    }

    /// Returns the status field (`STATUS` or `status`).
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.get_ignore_case("status").and_then(Value::as_str)
    }

    /// Returns `true` if the status equals `expected`, ignoring case.
    #[must_use]
    pub fn status_is(&self, expected: &str) -> bool {
        self.status()
            .is_some_and(|status| status.trim().eq_ignore_ascii_case(expected))
    }

    /// Returns `true` if the status is the `FAILURE` sentinel.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.status_is(FAILURE_STATUS)
    }

    /// Returns the human-readable message, if any.
    ///
    /// Looks at `STATUS_MESSAGE`, `message` and `error` in that order.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        MESSAGE_KEYS
            .iter()
            .filter_map(|key| self.get_ignore_case(key).and_then(value_as_text))
            .find(|message| !message.is_empty())
    }

    /// Returns the upstream error code, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<String> {
        self.get_ignore_case("code").and_then(value_as_text)
    }

    /// Returns the transaction id Internet.bs attaches to every response.
    #[must_use]
    pub fn transaction_id(&self) -> Option<String> {
        self.get_ignore_case("transactid").and_then(value_as_text)
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
