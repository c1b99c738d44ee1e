//! Typed wrappers for the Internet.bs endpoints.
//!
//! Each wrapper is an `async` method on [`ApiClient`](crate::ApiClient) that
//! fixes the resource path, the HTTP method and the parameter names for one
//! endpoint, then delegates to [`ApiClient::call`](crate::ApiClient::call).
//! Responses are returned unchanged; callers pick the fields they need.
//!
//! Endpoints that accept free-form data (contacts, forwarding rules, DNS
//! records, ...) take a [`Params`] map that is merged after the fixed
//! parameters.
//!
//! - [`domain`]: check, create, update, info, renew, list, privacy, lock
//! - [`transfer`]: initiate, retry, cancel, resend auth email, history
//! - [`host`]: nameserver (glue host) management
//! - [`forwarding`]: URL and email forwarding
//! - [`dns`]: DNS record management
//! - [`account`]: balance, currency, price list, account configuration

pub mod account;
pub mod dns;
pub mod domain;
pub mod forwarding;
pub mod host;
pub mod transfer;

use crate::clients::Params;

/// Parameter naming the domain an operation applies to.
pub const DOMAIN_PARAM: &str = "Domain";

/// Parameter naming a nameserver host.
pub const HOST_NAME_PARAM: &str = "HostName";

/// Builds `{name: value}` followed by `extra`; `extra` wins on conflicts.
pub(crate) fn with_param(name: &str, value: &str, extra: Params) -> Params {
    let mut params = Params::new();
    params.insert(name.to_string(), value.to_string());
    params.extend(extra);
    params
}

/// Builds the parameters for an operation on a single domain.
pub(crate) fn domain_params(domain: &str, extra: Params) -> Params {
    with_param(DOMAIN_PARAM, domain, extra)
}
