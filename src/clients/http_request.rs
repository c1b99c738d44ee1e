//! Request types for the Internet.bs API.
//!
//! This module provides [`ApiRequest`] and its builder. A request is a
//! resource path, an HTTP method and a flat parameter map; credentials are
//! not part of it and are merged in by the client at send time.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidRequestError;

/// Parameter map sent with a request and used for decoded `key=value` bodies.
pub type Params = BTreeMap<String, String>;

/// HTTP methods used by the Internet.bs API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters go in the query string.
    #[default]
    Get,
    /// Parameters go in a form-encoded body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A request to an Internet.bs resource.
///
/// # Example
///
/// ```rust
/// use internetbs_api::clients::{ApiRequest, HttpMethod};
///
/// let request = ApiRequest::builder(HttpMethod::Get, "Domain/Check")
///     .param("Domain", "example.com")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "/Domain/Check");
/// assert_eq!(request.params.get("Domain").map(String::as_str), Some("example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The resource path, always with exactly one leading `/`.
    pub path: String,
    /// Caller-supplied parameters.
    pub params: Params,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, path)
    }

    /// Normalizes a resource path to a single leading `/` with no trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::EmptyPath`] if nothing is left after
    /// trimming slashes and whitespace.
    pub fn normalize_path(path: &str) -> Result<String, InvalidRequestError> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(InvalidRequestError::EmptyPath {
                path: path.to_string(),
            });
        }
        Ok(format!("/{trimmed}"))
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    http_method: HttpMethod,
    path: String,
    params: Params,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            params: Params::new(),
        }
    }

    /// Adds a single parameter, replacing an earlier value of the same name.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Adds every parameter from `params`, replacing earlier values.
    #[must_use]
    pub fn params<K, V, I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the [`ApiRequest`], normalizing the resource path.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the resource path is empty.
    pub fn build(self) -> Result<ApiRequest, InvalidRequestError> {
        Ok(ApiRequest {
            http_method: self.http_method,
            path: ApiRequest::normalize_path(&self.path)?,
            params: self.params,
        })
    }
}
