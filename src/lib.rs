#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # TAXII 2.0 Client
//!
//! This crate is a client for [TAXII 2.0](https://docs.oasis-open.org/cti/taxii/v2.0/taxii-v2.0.html),
//! the OASIS protocol for exchanging cyber threat intelligence over HTTPS.
//!
//! ## Overview
//!
//! A TAXII server is browsed through three kinds of entity:
//!
//! 1. **Server Discovery** - The server's entry point, listing its API roots
//! 2. **API Root** - A partition of the server with its own limits and collections
//! 3. **Collection** - A set of STIX objects with read/write permissions
//!
//! Entities are *lazy*: building one never touches the network. The first
//! time any of its fields is read, the entity fetches its document with a
//! single GET, caches it, and serves every later read from the cache until
//! `refresh` is called.
//!
//! ## Key Features
//!
//! - **Lazy Loading**: One request per entity, on first field access
//! - **Independent Facets**: API root information and collections list load separately
//! - **Pre-loaded Collections**: Collections listed by an API root need no second request
//! - **Strict Media Types**: `Accept` and `Content-Type` are checked on every response
//! - **Read Operations**: Objects, single objects, manifests and request status
//! - **Authentication**: HTTP basic credentials or bearer tokens
//!
//! ## Usage
//!
//! ```no_run
//! use taxii2_client::{ClientConfig, ServerDiscovery, TaxiiClient};
//!
//! let client = TaxiiClient::with_config(ClientConfig::with_basic_auth("analyst", "secret"))?;
//! let server = ServerDiscovery::new("example.com", &client)?;
//!
//! if let Some(root) = server.default_api_root()? {
//!     println!("{} (max {} bytes)", root.title()?, root.max_content_length()?);
//!     for collection in root.collections()? {
//!         println!("  {} read={} write={}", collection.title()?, collection.can_read()?, collection.can_write()?);
//!     }
//! }
//! # Ok::<(), taxii2_client::TaxiiError>(())
//! ```
//!
//! ## Module Structure
//!
//! - **[resources]** - Lazily-loaded entities (ServerDiscovery, ApiRoot, Collection)
//! - **[client]** - Blocking HTTP facade, configuration and URL helpers
//! - **[error]** - Error types and result handling
//! - **[protocol]** - Media types and header helpers

pub mod client;
pub mod error;
pub mod protocol;
pub mod resources;

pub use client::{ClientConfig, TaxiiClient, TaxiiRequest};
pub use error::{Result, TaxiiError};
pub use protocol::{MEDIA_TYPE_STIX_V20, MEDIA_TYPE_TAXII_V20};
pub use resources::{
    ApiRoot, ApiRootInfo, Collection, CollectionInfo, DiscoveryInfo, LazyResource, Manifest,
    ObjectFilter, ServerDiscovery, Status,
};
