//! Domain orders and the contact parameters Internet.bs expects.

use serde::{Deserialize, Serialize};

use crate::clients::Params;

/// Contact roles that receive a copy of the order contact.
pub const CONTACT_ROLES: [&str; 4] = ["Registrant", "Admin", "Technical", "Billing"];

/// Language sent for every contact role.
pub const CONTACT_LANGUAGE: &str = "en";

/// The maximum number of nameservers an order carries.
pub const MAX_NAMESERVERS: usize = 4;

/// A domain contact.
///
/// One contact is copied into every role (registrant, admin, technical,
/// billing) when an order is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Company name; may be empty for individuals.
    pub organization: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// International dialling code without the `+`, e.g. `1` or `44`.
    pub phone_country_code: String,
    /// Subscriber number without the country code.
    pub phone: String,
    /// Street address line.
    pub street: String,
    /// City or locality.
    pub city: String,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// Postal or ZIP code.
    pub postal_code: String,
}

impl Contact {
    /// Formats the phone number as `+{cc}.{number}`.
    #[must_use]
    pub fn phone_number(&self) -> String {
        format!("+{}.{}", self.phone_country_code, self.phone)
    }

    /// Emits `{Role}_{Field}` parameters for every contact role.
    ///
    /// # Example
    ///
    /// ```rust
    /// use internetbs_api::registrar::Contact;
    ///
    /// let contact = Contact {
    ///     first_name: "Ada".to_string(),
    ///     phone_country_code: "44".to_string(),
    ///     phone: "2071234567".to_string(),
    ///     ..Contact::default()
    /// };
    ///
    /// let params = contact.role_params();
    /// assert_eq!(params["Admin_FirstName"], "Ada");
    /// assert_eq!(params["Billing_PhoneNumber"], "+44.2071234567");
    /// assert_eq!(params["Technical_Language"], "en");
    /// ```
    #[must_use]
    pub fn role_params(&self) -> Params {
        let phone_number = self.phone_number();
        let fields = [
            ("Organization", self.organization.as_str()),
            ("FirstName", self.first_name.as_str()),
            ("LastName", self.last_name.as_str()),
            ("Email", self.email.as_str()),
            ("PhoneNumber", phone_number.as_str()),
            ("Street", self.street.as_str()),
            ("City", self.city.as_str()),
            ("CountryCode", self.country_code.as_str()),
            ("PostalCode", self.postal_code.as_str()),
            ("Language", CONTACT_LANGUAGE),
        ];

        CONTACT_ROLES
            .iter()
            .flat_map(|role| {
                fields
                    .iter()
                    .map(move |(field, value)| (format!("{role}_{field}"), (*value).to_string()))
            })
            .collect()
    }
}

/// A domain together with the data needed to register, renew or transfer it.
///
/// Orders deserialize from the JSON a billing platform stores; every field
/// except `name` may be omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainOrder {
    /// Fully qualified domain name.
    pub name: String,
    /// Registration period in years.
    #[serde(default = "default_period")]
    pub period_years: u8,
    /// Nameservers; empty entries are ignored and only the first four count.
    #[serde(default)]
    pub nameservers: Vec<String>,
    /// Contact copied into every role.
    #[serde(default)]
    pub contact: Contact,
}

const fn default_period() -> u8 {
    1
}

impl Default for DomainOrder {
    fn default() -> Self {
        Self {
            name: String::new(),
            period_years: default_period(),
            nameservers: Vec::new(),
            contact: Contact::default(),
        }
    }
}

impl DomainOrder {
    /// Creates an order for `name` with a one-year period.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the registration period.
    #[must_use]
    pub const fn with_period(mut self, years: u8) -> Self {
        self.period_years = years;
        self
    }

    /// Sets the nameservers.
    #[must_use]
    pub fn with_nameservers<I, S>(mut self, nameservers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nameservers = nameservers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the contact used for every role.
    #[must_use]
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }

    /// Returns the `Period` value, e.g. `2Y`.
    #[must_use]
    pub fn period(&self) -> String {
        format!("{}Y", self.period_years)
    }

    /// Returns the `Ns_list` value: non-empty nameservers joined by `,`.
    #[must_use]
    pub fn nameserver_list(&self) -> String {
        self.nameservers
            .iter()
            .take(MAX_NAMESERVERS)
            .map(|ns| ns.trim())
            .filter(|ns| !ns.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parameters for `/Domain/Create`, without the `Domain` itself.
    #[must_use]
    pub fn registration_params(&self) -> Params {
        let mut params = self.contact.role_params();
        params.insert("Period".to_string(), self.period());
        params.insert("Ns_list".to_string(), self.nameserver_list());
        params
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Contact>();
    assert_send_sync::<DomainOrder>();
};
