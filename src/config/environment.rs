//! Internet.bs API environments.
//!
//! Internet.bs exposes two fixed origins that differ only by a `test`
//! subdomain prefix. [`Environment`] is the only way the client chooses
//! between them.

use std::fmt;

/// Origin of the production API.
pub const PRODUCTION_BASE_URL: &str = "https://api.internet.bs";

/// Origin of the sandbox API.
pub const TEST_BASE_URL: &str = "https://testapi.internet.bs";

/// The Internet.bs environment requests are routed to.
///
/// # Example
///
/// ```rust
/// use internetbs_api::Environment;
///
/// assert_eq!(Environment::from_test_mode(true), Environment::Test);
/// assert_eq!(Environment::Test.base_url(), "https://testapi.internet.bs");
/// assert_eq!(Environment::Production.to_string(), "production");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Live registrar API. Calls here cost money.
    #[default]
    Production,
    /// Sandbox API for integration testing.
    Test,
}

impl Environment {
    /// Maps the admin "test mode" toggle onto an environment.
    #[must_use]
    pub const fn from_test_mode(test_mode: bool) -> Self {
        if test_mode {
            Self::Test
        } else {
            Self::Production
        }
    }

    /// Returns the fixed origin for this environment, without a trailing slash.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Test => TEST_BASE_URL,
        }
    }

    /// Returns `true` for the sandbox environment.
    #[must_use]
    pub const fn is_test(self) -> bool {
        matches!(self, Self::Test)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Test => write!(f, "test"),
        }
    }
}
