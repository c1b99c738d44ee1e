//! HTTP client for Internet.bs API communication.
//!
//! [`ApiClient`] is the single path every outbound call takes: it signs the
//! parameters with the configured credentials, picks the origin for the
//! configured environment, sends the request, decodes the body and turns a
//! `FAILURE` status into an error.

use std::collections::HashMap;

use crate::clients::decode::decode_body;
use crate::clients::errors::{
    excerpt, ApiError, HttpResponseError, RegistrarApiError, UNKNOWN_ERROR_MESSAGE,
};
use crate::clients::http_request::{ApiRequest, HttpMethod, Params};
use crate::clients::http_response::ApiResponse;
use crate::config::{ApiKey, ApiPassword, Environment, InternetBsConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parameter carrying the API key.
pub const API_KEY_PARAM: &str = "ApiKey";
/// Parameter carrying the API password.
pub const PASSWORD_PARAM: &str = "Password";
/// Parameter selecting the response encoding.
pub const RESPONSE_FORMAT_PARAM: &str = "ResponseFormat";

const RESERVED_PARAMS: [&str; 3] = [API_KEY_PARAM, PASSWORD_PARAM, RESPONSE_FORMAT_PARAM];

/// HTTP client for the Internet.bs API.
///
/// Holds nothing mutable: the credentials are fixed at construction and each
/// call is an independent request/response cycle, so one client can be
/// shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use internetbs_api::clients::{ApiClient, HttpMethod, Params};
///
/// let client = ApiClient::configure("testapi", "testpass", true)?;
///
/// let mut params = Params::new();
/// params.insert("Domain".to_string(), "example.com".to_string());
///
/// let response = client.call("/Domain/Check", params, HttpMethod::Get).await?;
/// println!("{:?}", response.status());
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Credentials and settings.
    config: InternetBsConfig,
    /// Origin requests are sent to.
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client from raw credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or [`ConfigError::EmptyPassword`]
    /// if either credential is empty. No request is made.
    ///
    /// # Example
    ///
    /// ```rust
    /// use internetbs_api::{ApiClient, ConfigError};
    ///
    /// let result = ApiClient::configure("testapi", "", true);
    /// assert!(matches!(result, Err(ConfigError::EmptyPassword)));
    /// ```
    pub fn configure(
        key: impl Into<String>,
        secret: impl Into<String>,
        test_mode: bool,
    ) -> Result<Self, ConfigError> {
        let config = InternetBsConfig::builder()
            .api_key(ApiKey::new(key)?)
            .password(ApiPassword::new(secret)?)
            .test_mode(test_mode)
            .build()?;
        Self::new(config)
    }

    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: InternetBsConfig) -> Result<Self, ConfigError> {
        let base_uri = config.environment().base_url().to_string();
        Self::with_base_uri(config, base_uri)
    }

    /// Creates a client against an arbitrary origin. Only mock servers need this.
    pub(crate) fn with_base_uri(
        config: InternetBsConfig,
        base_uri: String,
    ) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Internet.bs API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            config,
            base_uri,
            default_headers,
        })
    }

    /// Returns the origin requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the environment selected by the configuration.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.config.environment()
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &InternetBsConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Merges the authentication parameters into `params`.
    ///
    /// `ApiKey`, `Password` and `ResponseFormat` always carry the configured
    /// values. Caller-supplied parameters with those names, in any letter
    /// case, are dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use internetbs_api::clients::{ApiClient, Params};
    ///
    /// let client = ApiClient::configure("real-key", "real-pass", true).unwrap();
    ///
    /// let mut params = Params::new();
    /// params.insert("ApiKey".to_string(), "spoofed".to_string());
    /// params.insert("Domain".to_string(), "example.com".to_string());
    ///
    /// let signed = client.sign(params);
    /// assert_eq!(signed["ApiKey"], "real-key");
    /// assert_eq!(signed["Password"], "real-pass");
    /// assert_eq!(signed["ResponseFormat"], "JSON");
    /// assert_eq!(signed["Domain"], "example.com");
    /// ```
    #[must_use]
    pub fn sign(&self, mut params: Params) -> Params {
        params.retain(|key, _| {
            !RESERVED_PARAMS
                .iter()
                .any(|reserved| key.eq_ignore_ascii_case(reserved))
        });
        params.insert(
            API_KEY_PARAM.to_string(),
            self.config.api_key().as_ref().to_string(),
        );
        params.insert(
            PASSWORD_PARAM.to_string(),
            self.config.password().as_ref().to_string(),
        );
        params.insert(RESPONSE_FORMAT_PARAM.to_string(), "JSON".to_string());
        params
    }

    /// Calls `resource_path` with `params` using `method`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidRequest`] for an empty resource path
    /// - [`ApiError::Transport`] for network, TLS or timeout failures
    /// - [`ApiError::Registrar`] when the response status is `FAILURE`
    /// - [`ApiError::Response`] for a non-2xx HTTP status
    /// - [`ApiError::Decode`] when the body cannot be decoded
    pub async fn call(
        &self,
        resource_path: &str,
        params: Params,
        method: HttpMethod,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::builder(method, resource_path)
            .params(params)
            .build()?;
        self.request(request).await
    }

    /// Sends a prebuilt [`ApiRequest`].
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_uri, request.path);
        let params = self.sign(request.params);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            environment = %self.environment(),
            "Sending Internet.bs API request"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url).query(&params),
            HttpMethod::Post => self.client.post(&url).form(&params),
        };
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let body = res.text().await?;

        Self::classify(&request.path, code, &body)
    }

    /// Decodes a response body and classifies the outcome.
    fn classify(path: &str, code: u16, body: &str) -> Result<ApiResponse, ApiError> {
        let is_success_code = (200..=299).contains(&code);

        let (fields, format) = match decode_body(body) {
            Ok(decoded) => decoded,
            Err(e) if !is_success_code => {
                tracing::warn!("Internet.bs API returned HTTP {} for {}", code, path);
                return Err(HttpResponseError {
                    code,
                    message: e.excerpt,
                }
                .into());
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path, ?format, "Decoded Internet.bs API response");

        let response = ApiResponse::new(code, fields);

        if response.is_failure() {
            let message = response
                .message()
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
            tracing::warn!("Internet.bs API reported FAILURE for {}: {}", path, message);
            return Err(RegistrarApiError {
                message,
                code: response.error_code(),
            }
            .into());
        }

        if !is_success_code {
            tracing::warn!("Internet.bs API returned HTTP {} for {}", code, path);
            return Err(HttpResponseError {
                code,
                message: excerpt(body),
            }
            .into());
        }

        Ok(response)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds a client for `base_uri` with fixed test credentials.
    pub(crate) fn client_for(base_uri: &str) -> ApiClient {
        let config = InternetBsConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .password(ApiPassword::new("test-pass").unwrap())
            .test_mode(true)
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        ApiClient::with_base_uri(config, base_uri.to_string()).unwrap()
    }
}
