//! Account endpoints.

use crate::clients::{ApiClient, ApiError, ApiResponse, HttpMethod, Params};
use crate::operations::with_param;

impl ApiClient {
    /// Returns the prepaid balance per currency (`/Account/Balance/Get`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn account_balance(&self) -> Result<ApiResponse, ApiError> {
        self.call("/Account/Balance/Get", Params::new(), HttpMethod::Get).await
    }

    /// Sets the default billing currency, e.g. `USD` (`/Account/DefaultCurrency/Set`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn set_default_currency(&self, currency: &str) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Account/DefaultCurrency/Set",
            with_param("DefaultCurrency", currency, Params::new()),
            HttpMethod::Post,
        )
        .await
    }

    /// Returns the default billing currency (`/Account/DefaultCurrency/Get`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn default_currency(&self) -> Result<ApiResponse, ApiError> {
        self.call(
            "/Account/DefaultCurrency/Get",
            Params::new(),
            HttpMethod::Get,
        )
        .await
    }

    /// Returns the account price list (`/Account/PriceList/Get`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn price_list(&self) -> Result<ApiResponse, ApiError> {
        self.call("/Account/PriceList/Get", Params::new(), HttpMethod::Get).await
    }

    /// Returns the account configuration (`/Account/Configuration/Get`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn account_configuration(&self) -> Result<ApiResponse, ApiError> {
        self.call("/Account/Configuration/Get", Params::new(), HttpMethod::Get).await
    }

    /// Changes account configuration values (`/Account/Configuration/Set`).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn set_account_configuration(&self, data: Params) -> Result<ApiResponse, ApiError> {
        self.call("/Account/Configuration/Set", data, HttpMethod::Post).await
    }
}
