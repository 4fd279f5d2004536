//! TAXII HTTP client facade.
//!
//! This module provides the blocking HTTP layer every TAXII entity shares:
//!
//! - **Authenticate** requests with HTTP basic credentials or a bearer token
//! - **Route** traffic through an optional proxy, with TLS verification on or off
//! - **Require** a media type via `Accept` and check the response `Content-Type`
//! - **Normalize** URLs so endpoints compare with plain string equality
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch   - TaxiiClient and GET operations
//! ├── config  - Client configuration
//! ├── request - Per-request options (query, version header)
//! └── utils   - URL normalization and status helpers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TaxiiClient`] | Shared blocking HTTP client |
//! | [`ClientConfig`] | Credentials, proxy, TLS and timeout settings |
//! | [`TaxiiRequest`] | Query parameters and `Version` header for one GET |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use taxii2_client::client::{ClientConfig, TaxiiClient};
//!
//! // No credentials
//! let client = TaxiiClient::new().unwrap();
//!
//! // Basic auth, self-signed test server
//! let config = ClientConfig {
//!     verify: false,
//!     ..ClientConfig::with_basic_auth("analyst", "secret")
//! };
//! let client = TaxiiClient::with_config(config).unwrap();
//! ```
//!
//! ## URL Helpers
//!
//! ```
//! use taxii2_client::client::{discovery_url, join_url};
//!
//! assert_eq!(discovery_url("example.com").unwrap(), "https://example.com/taxii/");
//! assert_eq!(
//!     join_url("https://example.com/api1/", "collections"),
//!     "https://example.com/api1/collections/",
//! );
//! ```

mod config;
mod fetch;
mod request;
mod utils;

pub use config::ClientConfig;
pub use fetch::TaxiiClient;
pub use request::TaxiiRequest;
pub use utils::*;
