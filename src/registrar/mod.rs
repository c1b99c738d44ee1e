//! Domain-level registrar operations.
//!
//! [`Registrar`] sits on top of [`ApiClient`] and answers the yes/no
//! questions a billing platform asks of a registrar module: is this name
//! free, did the registration go through, was the lock applied. Each method
//! maps a [`DomainOrder`] onto one endpoint and reads the outcome from the
//! decoded status.
//!
//! A response reporting `FAILURE` surfaces as [`ApiError::Registrar`]; any
//! other unexpected status yields `Ok(false)`.
//!
//! # Example
//!
//! ```rust,ignore
//! use internetbs_api::registrar::{Contact, DomainOrder, Registrar};
//! use internetbs_api::ApiClient;
//!
//! let registrar = Registrar::new(ApiClient::configure("testapi", "testpass", true)?);
//!
//! if registrar.is_domain_available("example.com").await? {
//!     let order = DomainOrder::new("example.com")
//!         .with_period(2)
//!         .with_nameservers(["ns1.example.net", "ns2.example.net"])
//!         .with_contact(Contact::default());
//!     registrar.register_domain(&order).await?;
//! }
//! ```

mod order;

pub use order::{Contact, DomainOrder, CONTACT_LANGUAGE, CONTACT_ROLES, MAX_NAMESERVERS};

use crate::clients::{ApiClient, ApiError, ApiResponse, Params};

/// Status of an available domain in `/Domain/Check`.
pub const AVAILABLE_STATUS: &str = "AVAILABLE";
/// Status of a completed operation.
pub const SUCCESS_STATUS: &str = "SUCCESS";
/// Product status of an accepted, not yet completed registration.
pub const PENDING_STATUS: &str = "PENDING";

const PRODUCT_STATUS_KEY: &str = "product_0_status";

/// Registrar operations on whole domains.
#[derive(Debug)]
pub struct Registrar {
    client: ApiClient,
}

impl Registrar {
    /// Wraps a configured client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client for endpoints this type does not cover.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns `true` if `domain` can be registered.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn is_domain_available(&self, domain: &str) -> Result<bool, ApiError> {
        let response = self.client.check_domain(domain).await?;
        Ok(response.status_is(AVAILABLE_STATUS))
    }

    /// Registers the order's domain with its contact copied into every role.
    ///
    /// Returns `true` when the product is `PENDING` or `SUCCESS`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn register_domain(&self, order: &DomainOrder) -> Result<bool, ApiError> {
        let response = self
            .client
            .create_domain(&order.name, order.registration_params())
            .await?;
        Ok(product_status_in(&response, &[PENDING_STATUS, SUCCESS_STATUS]))
    }

    /// Renews the order's domain for its period.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn renew_domain(&self, order: &DomainOrder) -> Result<bool, ApiError> {
        let response = self
            .client
            .renew_domain(&order.name, order.period_years)
            .await?;
        Ok(product_status_in(&response, &[SUCCESS_STATUS]))
    }

    /// Replaces the nameservers with the order's list.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn modify_nameservers(&self, order: &DomainOrder) -> Result<bool, ApiError> {
        let mut params = Params::new();
        params.insert("Ns_list".to_string(), order.nameserver_list());
        Ok(succeeded(&self.client.update_domain(&order.name, params).await?))
    }

    /// Turns on WHOIS privacy.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn enable_privacy_protection(&self, domain: &str) -> Result<bool, ApiError> {
        Ok(succeeded(&self.client.enable_private_whois(domain).await?))
    }

    /// Turns off WHOIS privacy.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn disable_privacy_protection(&self, domain: &str) -> Result<bool, ApiError> {
        Ok(succeeded(&self.client.disable_private_whois(domain).await?))
    }

    /// Applies the registrar lock.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn lock(&self, domain: &str) -> Result<bool, ApiError> {
        Ok(succeeded(&self.client.enable_registrar_lock(domain).await?))
    }

    /// Removes the registrar lock.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn unlock(&self, domain: &str) -> Result<bool, ApiError> {
        Ok(succeeded(&self.client.disable_registrar_lock(domain).await?))
    }

    /// Starts a transfer of the order's domain into this account.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn transfer_domain(
        &self,
        order: &DomainOrder,
        auth_code: &str,
    ) -> Result<bool, ApiError> {
        let mut params = order.contact.role_params();
        params.insert("transferAuthInfo".to_string(), auth_code.to_string());
        Ok(succeeded(&self.client.transfer_initiate(&order.name, params).await?))
    }

    /// Cancels a pending transfer.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn cancel_transfer(&self, domain: &str) -> Result<bool, ApiError> {
        Ok(succeeded(&self.client.transfer_cancel(domain).await?))
    }

    /// Returns the full `/Domain/Info` response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn domain_details(&self, domain: &str) -> Result<ApiResponse, ApiError> {
        self.client.domain_info(domain).await
    }
}

fn succeeded(response: &ApiResponse) -> bool {
    response.status_is(SUCCESS_STATUS)
}

fn product_status_in(response: &ApiResponse, accepted: &[&str]) -> bool {
    response
        .get_ignore_case(PRODUCT_STATUS_KEY)
        .and_then(serde_json::Value::as_str)
        .is_some_and(|status| {
            accepted
                .iter()
                .any(|expected| status.trim().eq_ignore_ascii_case(expected))
        })
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registrar>();
};
