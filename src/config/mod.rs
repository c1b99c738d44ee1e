//! Configuration types for the Internet.bs API client.
//!
//! # Overview
//!
//! - [`InternetBsConfig`]: immutable credentials and client settings
//! - [`InternetBsConfigBuilder`]: a builder for [`InternetBsConfig`]
//! - [`ApiKey`] / [`ApiPassword`]: validated credential newtypes
//! - [`Environment`]: production or sandbox origin
//!
//! # Example
//!
//! ```rust
//! use internetbs_api::{InternetBsConfig, ApiKey, ApiPassword, Environment};
//!
//! let config = InternetBsConfig::builder()
//!     .api_key(ApiKey::new("testapi").unwrap())
//!     .password(ApiPassword::new("testpass").unwrap())
//!     .test_mode(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment(), Environment::Test);
//! ```

mod environment;
mod newtypes;

pub use environment::{Environment, PRODUCTION_BASE_URL, TEST_BASE_URL};
pub use newtypes::{ApiKey, ApiPassword};

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;

/// Default transport timeout for a single call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings keys used by the billing-platform admin screens, in lookup order.
const SETTINGS_API_KEY: &[&str] = &["APITitle", "apikey"];
const SETTINGS_PASSWORD: &[&str] = &["APIPassword", "password"];
const SETTINGS_TEST_MODE: &[&str] = &["TestMode", "testMode"];

/// Configuration for the Internet.bs API client.
///
/// Holds the credentials every request is signed with, plus transport
/// settings. It is immutable once built and is `Clone + Send + Sync`.
#[derive(Clone, Debug)]
pub struct InternetBsConfig {
    api_key: ApiKey,
    password: ApiPassword,
    test_mode: bool,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl InternetBsConfig {
    /// Creates a new builder for constructing an `InternetBsConfig`.
    #[must_use]
    pub fn builder() -> InternetBsConfigBuilder {
        InternetBsConfigBuilder::new()
    }

    /// Builds a configuration from a flat admin settings map.
    ///
    /// Accepts both naming schemes found in billing-platform settings
    /// stores (`APITitle` / `APIPassword` / `TestMode` and
    /// `apikey` / `password` / `testMode`). Values are trimmed, and a blank
    /// value falls through to the other name. Test mode
    /// is on for `on`, `yes`, `true` or `1` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or [`ConfigError::EmptyPassword`]
    /// when a credential is missing or blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use internetbs_api::InternetBsConfig;
    ///
    /// let settings = HashMap::from([
    ///     ("APITitle".to_string(), " testapi ".to_string()),
    ///     ("APIPassword".to_string(), "testpass".to_string()),
    ///     ("TestMode".to_string(), "on".to_string()),
    /// ]);
    ///
    /// let config = InternetBsConfig::from_settings(&settings).unwrap();
    /// assert_eq!(config.api_key().as_ref(), "testapi");
    /// assert!(config.test_mode());
    /// ```
    pub fn from_settings(settings: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let lookup = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| settings.get(*name))
                .map(|value| value.trim())
                .find(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or_default()
        };

        let test_mode = matches!(
            lookup(SETTINGS_TEST_MODE).to_ascii_lowercase().as_str(),
            "on" | "yes" | "true" | "1"
        );

        Self::builder()
            .api_key(ApiKey::new(lookup(SETTINGS_API_KEY))?)
            .password(ApiPassword::new(lookup(SETTINGS_PASSWORD))?)
            .test_mode(test_mode)
            .build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API password.
    #[must_use]
    pub const fn password(&self) -> &ApiPassword {
        &self.password
    }

    /// Returns whether requests go to the sandbox API.
    #[must_use]
    pub const fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// Returns the environment selected by the test mode flag.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        Environment::from_test_mode(self.test_mode)
    }

    /// Returns the per-call transport timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify InternetBsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InternetBsConfig>();
};

/// Builder for constructing [`InternetBsConfig`] instances.
///
/// Required fields are `api_key` and `password`.
///
/// # Defaults
///
/// - `test_mode`: `false`
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct InternetBsConfigBuilder {
    api_key: Option<ApiKey>,
    password: Option<ApiPassword>,
    test_mode: Option<bool>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl InternetBsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API password (required).
    #[must_use]
    pub fn password(mut self, password: ApiPassword) -> Self {
        self.password = Some(password);
        self
    }

    /// Routes requests to the sandbox API when `true`.
    #[must_use]
    pub const fn test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = Some(test_mode);
        self
    }

    /// Sets the per-call transport timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`InternetBsConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `password` is not set, and [`ConfigError::InvalidTimeout`] for a zero
    /// timeout.
    pub fn build(self) -> Result<InternetBsConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(InternetBsConfig {
            api_key,
            password,
            test_mode: self.test_mode.unwrap_or(false),
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
