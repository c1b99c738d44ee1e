//! Domain endpoints.
//!
//! ```rust,ignore
//! let response = client.check_domain("example.com").await?;
//! if response.status_is("AVAILABLE") {
//!     client.create_domain("example.com", contact_params).await?;
//! }
//! ```

use crate::clients::{ApiClient, ApiError, ApiResponse, HttpMethod, Params};
use crate::operations::domain_params;

impl ApiClient {
    /// Checks whether a domain can be registered (`/Domain/Check`).
    ///
    /// The response status is `AVAILABLE` or `UNAVAILABLE`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn check_domain(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Check",
            domain_params(domain, Params::new()),
            HttpMethod::Get,
        )
        .await
    }

    /// Registers a domain (`/Domain/Create`).
    ///
    /// `data` carries the contact fields and optional settings such as
    /// `Period` and `Ns_list`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn create_domain(&self, domain: &str, data: Params) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Create",
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Updates contacts, nameservers or settings of a domain (`/Domain/Update`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn update_domain(&self, domain: &str, data: Params) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Update",
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Retrieves the full record of a domain (`/Domain/Info`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn domain_info(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Info",
            domain_params(domain, Params::new()),
            HttpMethod::Get,
        )
        .await
    }

    /// Retrieves the status of a domain at its registry (`/Domain/RegistryStatus`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn registry_status(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/RegistryStatus",
            domain_params(domain, Params::new()),
            HttpMethod::Get,
        )
        .await
    }

    /// Counts the domains in the account (`/Domain/Count`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn domain_count(&self) -> Result<ApiResponse, ApiError> {
        self.call("/Domain/Count", Params::new(), HttpMethod::Get).await
    }

    /// Restores a domain from redemption (`/Domain/Restore`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn restore_domain(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Restore",
            domain_params(domain, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Lists the domains in the account (`/Domain/List`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn list_domains(&self) -> Result<ApiResponse, ApiError> {
        self.call("/Domain/List", Params::new(), HttpMethod::Get).await
    }

    /// Renews a domain for `years` years (`/Domain/Renew`).
    ///
    /// Success is reported per product in `product_0_status`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn renew_domain(&self, domain: &str, years: u8) -> Result<ApiResponse, ApiError> {
        let mut period = Params::new();
        period.insert("Period".to_string(), format!("{years}Y"));
        self.call(
            "/Domain/Renew",
            domain_params(domain, period),
            HttpMethod::Post,
        )
        .await
    }

    /// Turns on WHOIS privacy (`/Domain/PrivateWhois/Enable`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn enable_private_whois(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/PrivateWhois/Enable",
            domain_params(domain, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Turns off WHOIS privacy (`/Domain/PrivateWhois/Disable`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn disable_private_whois(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/PrivateWhois/Disable",
            domain_params(domain, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Locks a domain against transfers (`/Domain/RegistrarLock/Enable`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn enable_registrar_lock(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/RegistrarLock/Enable",
            domain_params(domain, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Removes the transfer lock (`/Domain/RegistrarLock/Disable`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn disable_registrar_lock(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/RegistrarLock/Disable",
            domain_params(domain, Params::new()),
            HttpMethod::Post,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::clients::test_support::client_for;
    use crate::clients::{ApiError, Params};
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_check_domain_reports_availability() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Domain/Check"))
            .and(query_param("Domain", "example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "STATUS": "AVAILABLE",
                "domain": "example.com",
                "minregperiod": "1Y"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let response = client.check_domain("example.com").await.unwrap();

        assert_eq!(response.get_str("STATUS").as_deref(), Some("AVAILABLE"));
        assert_eq!(response.get_str("minregperiod").as_deref(), Some("1Y"));
    }

    #[tokio::test]
    async fn test_check_domain_failure_carries_registrar_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Domain/Check"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "STATUS": "FAILURE",
                "STATUS_MESSAGE": "bad domain"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let error = client.check_domain("bad..domain").await.unwrap_err();

        match error {
            ApiError::Registrar(e) => assert_eq!(e.message, "bad domain"),
            other => panic!("expected registrar error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_domain_posts_contact_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Domain/Create"))
            .and(body_string_contains("Domain=example.com"))
            .and(body_string_contains("Registrant_FirstName=Jane"))
            .and(body_string_contains("Period=2Y"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "SUCCESS",
                "product_0_status": "PENDING"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut data = Params::new();
        data.insert("Registrant_FirstName".to_string(), "Jane".to_string());
        data.insert("Period".to_string(), "2Y".to_string());

        let client = client_for(&mock_server.uri());
        let response = client.create_domain("example.com", data).await.unwrap();

        assert_eq!(response.get_str("product_0_status").as_deref(), Some("PENDING"));
    }

    #[tokio::test]
    async fn test_renew_domain_formats_period_in_years() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Domain/Renew"))
            .and(body_string_contains("Period=3Y"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("status=SUCCESS\nproduct_0_status=SUCCESS"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let response = client.renew_domain("example.com", 3).await.unwrap();
        assert_eq!(response.get_str("product_0_status").as_deref(), Some("SUCCESS"));
    }

    #[tokio::test]
    async fn test_account_wide_domain_queries_send_no_domain() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Domain/List"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "SUCCESS",
                "domaincount": 2,
                "domain": ["a.com", "b.com"]
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Domain/Count"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("status=SUCCESS\ntotaldomains=2"),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let list = client.list_domains().await.unwrap();
        let count = client.domain_count().await.unwrap();

        assert_eq!(list.get_str("domaincount").as_deref(), Some("2"));
        assert_eq!(list.get("domain").and_then(|v| v.as_array()).map(Vec::len), Some(2));
        assert_eq!(count.get_str("totaldomains").as_deref(), Some("2"));

        for request in mock_server.received_requests().await.unwrap() {
            assert!(!request.url.query_pairs().any(|(k, _)| k == "Domain"));
        }
    }

    #[tokio::test]
    async fn test_lock_and_privacy_endpoints_use_post() {
        let mock_server = MockServer::start().await;

        for endpoint in [
            "/Domain/PrivateWhois/Enable",
            "/Domain/PrivateWhois/Disable",
            "/Domain/RegistrarLock/Enable",
            "/Domain/RegistrarLock/Disable",
        ] {
            Mock::given(method("POST"))
                .and(path(endpoint))
                .and(body_string_contains("Domain=example.com"))
                .respond_with(ResponseTemplate::new(200).set_body_string("status=SUCCESS"))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = client_for(&mock_server.uri());
        client.enable_private_whois("example.com").await.unwrap();
        client.disable_private_whois("example.com").await.unwrap();
        client.enable_registrar_lock("example.com").await.unwrap();
        client.disable_registrar_lock("example.com").await.unwrap();
    }

    #[tokio::test]
    async fn test_info_registry_status_update_and_restore() {
        let mock_server = MockServer::start().await;

        for endpoint in ["/Domain/Info", "/Domain/RegistryStatus"] {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .and(query_param("Domain", "example.com"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "status": "SUCCESS",
                    "domain": "example.com",
                    "registrystatus": "ok"
                })))
                .expect(1)
                .mount(&mock_server)
                .await;
        }
        Mock::given(method("POST"))
            .and(path("/Domain/Update"))
            .and(body_string_contains("Ns_list=ns1.example.net"))
            .respond_with(ResponseTemplate::new(200).set_body_string("status=SUCCESS"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/Domain/Restore"))
            .and(body_string_contains("Domain=example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_string("status=SUCCESS"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut update = Params::new();
        update.insert("Ns_list".to_string(), "ns1.example.net".to_string());

        let client = client_for(&mock_server.uri());
        let info = client.domain_info("example.com").await.unwrap();
        assert_eq!(info.get_str("domain").as_deref(), Some("example.com"));
        let registry = client.registry_status("example.com").await.unwrap();
        assert_eq!(registry.get_str("registrystatus").as_deref(), Some("ok"));
        client.update_domain("example.com", update).await.unwrap();
        client.restore_domain("example.com").await.unwrap();
    }
}
