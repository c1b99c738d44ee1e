//! HTTP client types for Internet.bs API communication.
//!
//! # Overview
//!
//! - [`ApiClient`]: the async gateway every call goes through
//! - [`ApiRequest`]: a resource path, method and parameter map
//! - [`ApiResponse`]: decoded response fields
//! - [`HttpMethod`]: `GET` (query string) or `POST` (form body)
//! - [`decode`]: the JSON and `key=value` body decoders
//! - [`ApiError`]: classified call failures
//!
//! # Example
//!
//! ```rust,ignore
//! use internetbs_api::clients::{ApiClient, ApiRequest, HttpMethod};
//!
//! let client = ApiClient::configure("testapi", "testpass", true)?;
//!
//! let request = ApiRequest::builder(HttpMethod::Get, "/Domain/Check")
//!     .param("Domain", "example.com")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure handling
//!
//! A response whose status field is `FAILURE` never reaches the caller as a
//! value; it becomes [`ApiError::Registrar`]. Transport failures surface as
//! [`ApiError::Transport`]. There is no automatic retry.

mod api_client;
pub mod decode;
mod errors;
mod http_request;
mod http_response;

pub use api_client::{
    ApiClient, API_KEY_PARAM, PASSWORD_PARAM, RESPONSE_FORMAT_PARAM, SDK_VERSION,
};
pub use decode::{BodyFormat, Fields};
pub use errors::{
    ApiError, DecodeError, HttpResponseError, InvalidRequestError, RegistrarApiError,
    UNKNOWN_ERROR_MESSAGE,
};
pub use http_request::{ApiRequest, ApiRequestBuilder, HttpMethod, Params};
pub use http_response::{ApiResponse, FAILURE_STATUS};

#[cfg(test)]
pub(crate) use api_client::test_support;
