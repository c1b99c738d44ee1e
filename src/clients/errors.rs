//! Error types for Internet.bs API calls.
//!
//! Every call either returns a decoded response or one of these classified
//! failures. Nothing is retried.
//!
//! - [`RegistrarApiError`]: the response reported a `FAILURE` status
//! - [`HttpResponseError`]: a non-2xx HTTP status without a failure envelope
//! - [`DecodeError`]: the body was neither a JSON object nor `key=value` text
//! - [`InvalidRequestError`]: the request failed validation before sending
//! - [`ApiError`]: unified error type encompassing all of the above plus
//!   transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use internetbs_api::clients::ApiError;
//!
//! match client.check_domain("example.com").await {
//!     Ok(response) => println!("Status: {:?}", response.status()),
//!     Err(ApiError::Registrar(e)) => println!("Registrar said: {}", e.message),
//!     Err(ApiError::Transport(e)) => println!("Network error: {}", e),
//!     Err(e) => println!("Other failure: {}", e),
//! }
//! ```

use thiserror::Error;

/// Fallback message when a failure response carries no message field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Error returned when the decoded response reports a `FAILURE` status.
///
/// The message is the registrar's own text, unmodified, so it can be shown
/// to end users as-is.
///
/// # Example
///
/// ```rust
/// use internetbs_api::clients::RegistrarApiError;
///
/// let error = RegistrarApiError {
///     message: "bad domain".to_string(),
///     code: None,
/// };
/// assert_eq!(error.to_string(), "bad domain");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RegistrarApiError {
    /// The upstream message, or `"Unknown error"` when none was present.
    pub message: String,
    /// The upstream error code, when the response carried one.
    pub code: Option<String>,
}

/// Error returned when the API answers with a non-2xx HTTP status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, truncated.
    pub message: String,
}

/// Error returned when a response body cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unable to decode response body as JSON or key=value text: {excerpt}")]
pub struct DecodeError {
    /// The start of the offending body.
    pub excerpt: String,
}

impl DecodeError {
    /// Builds a decode error holding the first characters of `body`.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        Self {
            excerpt: excerpt(body),
        }
    }
}

/// Returns at most the first 120 characters of a response body.
pub(crate) fn excerpt(body: &str) -> String {
    body.chars().take(120).collect()
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The resource path is empty after normalization.
    #[error("Invalid resource path '{path}'. Expected a path such as '/Domain/Check'.")]
    EmptyPath {
        /// The path that was provided.
        path: String,
    },
}

/// Unified error type for Internet.bs API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The registrar reported a `FAILURE` status.
    #[error(transparent)]
    Registrar(#[from] RegistrarApiError),

    /// Non-2xx HTTP status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network, TLS or timeout failure.
    #[error("API request error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Returns the registrar's message when this is a [`RegistrarApiError`].
    #[must_use]
    pub fn registrar_message(&self) -> Option<&str> {
        match self {
            Self::Registrar(e) => Some(&e.message),
            _ => None,
        }
    }
}
