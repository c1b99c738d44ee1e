//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! misconfigured client fails before any request leaves the process.
//!
//! # Example
//!
//! ```rust
//! use internetbs_api::{ApiPassword, ConfigError};
//!
//! let result = ApiPassword::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPassword)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("The Internet.bs registrar is not fully configured. Missing API key.")]
    EmptyApiKey,

    /// API password cannot be empty.
    #[error("The Internet.bs registrar is not fully configured. Missing API password.")]
    EmptyPassword,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. Set it before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The request timeout must be greater than zero.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// Why the HTTP client could not be built.
        reason: String,
    },
}
