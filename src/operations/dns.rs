//! DNS record endpoints.

use crate::clients::{ApiClient, ApiError, ApiResponse, HttpMethod, Params};
use crate::operations::domain_params;

impl ApiClient {
    /// Adds a DNS record (`/Domain/DnsRecord/Add`).
    ///
    /// `data` carries `FullRecordName`, `Type`, `Value` and optionally `Ttl`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn dns_record_add(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/DnsRecord/Add",
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Removes a DNS record (`/Domain/DnsRecord/Remove`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn dns_record_remove(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/DnsRecord/Remove",
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Replaces a DNS record (`/Domain/DnsRecord/Update`).
    ///
    /// `data` identifies the current record and carries the `New*` fields.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn dns_record_update(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/DnsRecord/Update",
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Lists the DNS records of a domain (`/Domain/DnsRecord/List`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn dns_record_list(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/DnsRecord/List",
            domain_params(domain, Params::new()),
            HttpMethod::Get,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::clients::test_support::client_for;
    use crate::clients::{ApiError, Params};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn a_record() -> Params {
        [
            ("FullRecordName", "www.example.com"),
            ("Type", "A"),
            ("Value", "192.0.2.10"),
            ("Ttl", "3600"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[tokio::test]
    async fn test_dns_record_add_posts_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Domain/DnsRecord/Add"))
            .and(body_string_contains("FullRecordName=www.example.com"))
            .and(body_string_contains("Type=A"))
            .and(body_string_contains("Ttl=3600"))
            .respond_with(ResponseTemplate::new(200).set_body_string("status=SUCCESS"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        client.dns_record_add("example.com", a_record()).await.unwrap();
    }

    #[tokio::test]
    async fn test_dns_record_remove_failure_is_classified() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Domain/DnsRecord/Remove"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "FAILURE",
                "message": "Record not found",
                "code": 100_002
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server.uri());
        let error = client
            .dns_record_remove("example.com", a_record())
            .await
            .unwrap_err();

        match error {
            ApiError::Registrar(e) => {
                assert_eq!(e.message, "Record not found");
                assert_eq!(e.code.as_deref(), Some("100002"));
            }
            other => panic!("expected registrar error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dns_record_update_and_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Domain/DnsRecord/Update"))
            .and(body_string_contains("NewValue=192.0.2.20"))
            .respond_with(ResponseTemplate::new(200).set_body_string("status=SUCCESS"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Domain/DnsRecord/List"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "SUCCESS",
                "total_records": 1,
                "records": [{"name": "www.example.com", "type": "A", "value": "192.0.2.20"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut update = a_record();
        update.insert("NewValue".to_string(), "192.0.2.20".to_string());

        let client = client_for(&mock_server.uri());
        client.dns_record_update("example.com", update).await.unwrap();
        let list = client.dns_record_list("example.com").await.unwrap();
        assert_eq!(list.get_str("total_records").as_deref(), Some("1"));
    }
}
