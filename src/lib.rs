//! # Internet.bs API Rust client
//!
//! An async client for the Internet.bs domain-registrar HTTP API, providing
//! type-safe configuration, request signing, response decoding and typed
//! wrappers for the registrar endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`InternetBsConfig`] and [`InternetBsConfigBuilder`]
//! - Validated newtypes for the API credentials
//! - A single request path, [`ApiClient::call`], that signs every call with
//!   the configured credentials and routes it to the production or test origin
//! - Decoding of JSON and `key=value` response bodies into one field map
//! - Classification of `FAILURE` responses into [`ApiError::Registrar`]
//! - Endpoint wrappers for domains, transfers, hosts, forwarding, DNS and
//!   the account, in [`operations`]
//! - Domain-level yes/no operations for billing integrations, in [`registrar`]
//!
//! ## Quick Start
//!
//! ```rust
//! use internetbs_api::{ApiKey, ApiPassword, Environment, InternetBsConfig};
//!
//! let config = InternetBsConfig::builder()
//!     .api_key(ApiKey::new("testapi").unwrap())
//!     .password(ApiPassword::new("testpass").unwrap())
//!     .test_mode(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment(), Environment::Test);
//! assert_eq!(config.environment().base_url(), "https://testapi.internet.bs");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use internetbs_api::{ApiClient, HttpMethod, Params};
//!
//! let client = ApiClient::configure("testapi", "testpass", true)?;
//!
//! // Typed wrapper
//! let response = client.check_domain("example.com").await?;
//! println!("{:?}", response.status());
//!
//! // Generic call for any endpoint
//! let mut params = Params::new();
//! params.insert("Domain".to_string(), "example.com".to_string());
//! let response = client.call("/Domain/Info", params, HttpMethod::Get).await?;
//! ```
//!
//! ## Configuration from a settings map
//!
//! Billing platforms usually store registrar settings as strings:
//!
//! ```rust
//! use std::collections::HashMap;
//! use internetbs_api::{ConfigError, InternetBsConfig};
//!
//! let mut settings = HashMap::new();
//! settings.insert("APITitle".to_string(), "testapi".to_string());
//! settings.insert("APIPassword".to_string(), String::new());
//!
//! assert_eq!(
//!     InternetBsConfig::from_settings(&settings).unwrap_err(),
//!     ConfigError::EmptyPassword
//! );
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for each call, `warn` for
//! failures) and installs no subscriber. Credentials are never logged.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: empty credentials are rejected before any network call
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No retries**: every call is a single request/response cycle

pub mod clients;
pub mod config;
pub mod error;
pub mod operations;
pub mod registrar;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, ApiPassword, Environment, InternetBsConfig, InternetBsConfigBuilder,
    PRODUCTION_BASE_URL, TEST_BASE_URL,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiClient, ApiError, ApiRequest, ApiRequestBuilder, ApiResponse, BodyFormat, DecodeError,
    Fields, HttpMethod, HttpResponseError, InvalidRequestError, Params, RegistrarApiError,
};

// Re-export endpoint and registrar types
pub use operations::forwarding::ForwardKind;
pub use registrar::{Contact, DomainOrder, Registrar};
