//! Nameserver (glue host) endpoints.

use crate::clients::{ApiClient, ApiError, ApiResponse, HttpMethod, Params};
use crate::operations::{domain_params, with_param, HOST_NAME_PARAM};

impl ApiClient {
    /// Creates a nameserver under `domain` (`/Domain/Host/Create`).
    ///
    /// `data` carries `HostName` and, if needed, the glue `IP_List`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn host_create(&self, domain: &str, data: Params) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Host/Create",
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Returns a nameserver and its addresses (`/Domain/Host/Info`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn host_info(&self, host_name: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Host/Info",
            with_param(HOST_NAME_PARAM, host_name, Params::new()),
            HttpMethod::Get,
        )
        .await
    }

    /// Changes the addresses of a nameserver (`/Domain/Host/Update`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn host_update(
        &self,
        host_name: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Host/Update",
            with_param(HOST_NAME_PARAM, host_name, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Deletes a nameserver (`/Domain/Host/Delete`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn host_delete(&self, host_name: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Host/Delete",
            with_param(HOST_NAME_PARAM, host_name, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Lists the nameservers defined under `domain` (`/Domain/Host/List`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn host_list(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Host/List",
            domain_params(domain, Params::new()),
            HttpMethod::Get,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::clients::test_support::client_for;
    use crate::clients::Params;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_host_create_sends_glue_records() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Domain/Host/Create"))
            .and(body_string_contains("Domain=example.com"))
            .and(body_string_contains("HostName=ns1.example.com"))
            .and(body_string_contains("IP_List=192.0.2.1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("status=SUCCESS"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut data = Params::new();
        data.insert("HostName".to_string(), "ns1.example.com".to_string());
        data.insert("IP_List".to_string(), "192.0.2.1".to_string());

        let client = client_for(&mock_server.uri());
        client.host_create("example.com", data).await.unwrap();
    }

    #[tokio::test]
    async fn test_host_info_is_keyed_by_host_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Domain/Host/Info"))
            .and(query_param("HostName", "ns1.example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "SUCCESS",
                "host": "ns1.example.com",
                "ip_0": "192.0.2.1"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let response = client.host_info("ns1.example.com").await.unwrap();
        assert_eq!(response.get_str("ip_0").as_deref(), Some("192.0.2.1"));
    }

    #[tokio::test]
    async fn test_host_update_delete_and_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Domain/Host/Update"))
            .and(body_string_contains("HostName=ns1.example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_string("status=SUCCESS"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/Domain/Host/Delete"))
            .and(body_string_contains("HostName=ns1.example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_string("status=SUCCESS"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Domain/Host/List"))
            .and(query_param("Domain", "example.com"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("status=SUCCESS\nhost_0=ns1.example.com"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        client.host_update("ns1.example.com", Params::new()).await.unwrap();
        client.host_delete("ns1.example.com").await.unwrap();
        let list = client.host_list("example.com").await.unwrap();
        assert_eq!(list.get_str("host_0").as_deref(), Some("ns1.example.com"));
    }
}
