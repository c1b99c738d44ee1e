//! Validated newtype wrappers for Internet.bs credentials.
//!
//! Both credentials are rejected when empty. The password never shows up in
//! debug output.

use crate::error::ConfigError;
use std::fmt;

/// A validated Internet.bs API key.
///
/// # Example
///
/// ```rust
/// use internetbs_api::ApiKey;
///
/// let key = ApiKey::new("testapi").unwrap();
/// assert_eq!(key.as_ref(), "testapi");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Internet.bs API password.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiPassword(*****)`.
///
/// # Example
///
/// ```rust
/// use internetbs_api::ApiPassword;
///
/// let password = ApiPassword::new("testpass").unwrap();
/// assert_eq!(format!("{:?}", password), "ApiPassword(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiPassword(String);

impl ApiPassword {
    /// Creates a new validated API password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for ApiPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiPassword(*****)")
    }
}
