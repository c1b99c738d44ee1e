//! Incoming domain transfer endpoints.

use crate::clients::{ApiClient, ApiError, ApiResponse, HttpMethod, Params};
use crate::operations::domain_params;

impl ApiClient {
    /// Starts a transfer into the account (`/Domain/Transfer/Initiate`).
    ///
    /// `data` must carry `transferAuthInfo` and any contact fields the
    /// registry requires.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn transfer_initiate(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Transfer/Initiate",
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Retries a stalled transfer, optionally with a new auth code
    /// (`/Domain/Transfer/Retry`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn transfer_retry(
        &self,
        domain: &str,
        data: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Transfer/Retry",
            domain_params(domain, data),
            HttpMethod::Post,
        )
        .await
    }

    /// Cancels a pending transfer (`/Domain/Transfer/Cancel`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn transfer_cancel(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Transfer/Cancel",
            domain_params(domain, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Resends the initial authorization email (`/Domain/Transfer/ResendAuthEmail`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn transfer_resend_auth_email(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Transfer/ResendAuthEmail",
            domain_params(domain, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Returns the transfer history of a domain (`/Domain/Transfer/History`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn transfer_history(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Domain/Transfer/History",
            domain_params(domain, Params::new()),
            HttpMethod::Get,
        )
        .await
    }
}
