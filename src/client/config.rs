//! Client configuration.
//!
//! [`ClientConfig`] holds everything the HTTP facade needs that is not part of
//! an individual request: credentials, proxy, TLS verification, timeout and
//! any extra headers. It is plain data with serde support so a host
//! application can embed it in its own configuration file.
//!
//! # Examples
//!
//! ```
//! use taxii2_client::client::ClientConfig;
//!
//! let config = ClientConfig {
//!     username: Some("analyst".into()),
//!     password: Some("secret".into()),
//!     request_timeout_ms: Some(10_000),
//!     ..Default::default()
//! };
//! assert!(config.verify);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for [`TaxiiClient`](super::TaxiiClient).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Username for HTTP basic authentication.
    pub username: Option<String>,
    /// Password for HTTP basic authentication.
    pub password: Option<String>,
    /// Bearer token. Takes precedence over basic credentials when both are set.
    pub token: Option<String>,
    /// Proxy used for every request (`http://`, `https://` or `socks5://`).
    pub proxy_url: Option<String>,
    /// Verify the server's TLS certificate.
    pub verify: bool,
    /// Per-request timeout in milliseconds. `None` leaves the transport default.
    pub request_timeout_ms: Option<u64>,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Headers added to every request.
    pub extra_headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            token: None,
            proxy_url: None,
            verify: true,
            request_timeout_ms: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            extra_headers: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    /// Configuration with HTTP basic credentials.
    pub fn with_basic_auth(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            ..Default::default()
        }
    }

    /// Configuration with a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Whether any credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.token.is_some() || self.username.is_some()
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("proxy_url", &self.proxy_url)
            .field("verify", &self.verify)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("user_agent", &self.user_agent)
            .field("extra_headers", &self.extra_headers)
            .finish()
    }
}
