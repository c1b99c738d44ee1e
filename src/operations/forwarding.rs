//! URL and email forwarding endpoints.

use crate::clients::{ApiClient, ApiError, ApiResponse, HttpMethod, Params};
use crate::operations::domain_params;

/// The two forwarding services, which share one endpoint layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardKind {
    /// Web redirects (`/Domain/UrlForward/...`).
    Url,
    /// Mailbox forwards (`/Domain/EmailForward/...`).
    Email,
}

impl ForwardKind {
    fn path(self, action: &str) -> String {
        let service = match self {
            Self::Url => "UrlForward",
            Self::Email => "EmailForward",
        };
        format!("/Domain/{service}/{action}")
    }
}

impl ApiClient {
    /// Adds a forwarding rule.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn forward_add(
        &self,
        kind: ForwardKind,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            &kind.path("Add"),
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Changes an existing forwarding rule.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn forward_update(
        &self,
        kind: ForwardKind,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            &kind.path("Update"),
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Removes forwarding for a domain.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn forward_remove(
        &self,
        kind: ForwardKind,
        domain: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            &kind.path("Remove"),
            domain_params(domain, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Lists the forwarding rules of a domain.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn forward_list(
        &self,
        kind: ForwardKind,
        domain: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            &kind.path("List"),
            domain_params(domain, Params::new()),
            HttpMethod::Get,
        )
        .await
    }

    /// Adds a URL forward (`/Domain/UrlForward/Add`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn url_forward_add(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.forward_add(ForwardKind::Url, domain, data).await
    }

    /// Updates a URL forward (`/Domain/UrlForward/Update`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn url_forward_update(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.forward_update(ForwardKind::Url, domain, data).await
    }

    /// Removes URL forwarding (`/Domain/UrlForward/Remove`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn url_forward_remove(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.forward_remove(ForwardKind::Url, domain).await
    }

    /// Lists URL forwards (`/Domain/UrlForward/List`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn url_forward_list(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.forward_list(ForwardKind::Url, domain).await
    }

    /// Adds an email forward (`/Domain/EmailForward/Add`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn email_forward_add(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.forward_add(ForwardKind::Email, domain, data).await
    }

    /// Updates an email forward (`/Domain/EmailForward/Update`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn email_forward_update(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.forward_update(ForwardKind::Email, domain, data).await
    }

    /// Removes email forwarding (`/Domain/EmailForward/Remove`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn email_forward_remove(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.forward_remove(ForwardKind::Email, domain).await
    }

    /// Lists email forwards (`/Domain/EmailForward/List`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn email_forward_list(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.forward_list(ForwardKind::Email, domain).await
    }
}
