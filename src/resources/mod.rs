//! Lazily-loaded TAXII 2.0 entities.
//!
//! Every entity is created from a URL and a shared [`TaxiiClient`](crate::TaxiiClient)
//! without touching the network. The first time one of its fields is read,
//! it fetches its document once and caches it; later reads are free until
//! `refresh` is called.
//!
//! # Entity Graph
//!
//! ```text
//! ServerDiscovery ──api_roots──▶ ApiRoot (unloaded) ──collections──▶ Collection (loaded)
//! ```
//!
//! # Key Types
//!
//! | Type | Endpoint | Cached facets |
//! |------|----------|---------------|
//! | [`ServerDiscovery`] | `/taxii/` | discovery document |
//! | [`ApiRoot`] | `<root>/` | information, collections list |
//! | [`Collection`] | `<root>/collections/<id>/` | collection information |
//! | [`Status`] | `<root>/status/<id>/` | none (snapshot) |
//! | [`Manifest`] | `<collection>/manifest/` | none (snapshot) |

mod api_root;
mod collection;
mod discovery;
mod filter;
pub(crate) mod lazy;
mod status;

pub use api_root::{ApiRoot, ApiRootInfo};
pub use collection::{Collection, CollectionInfo, COLLECTION_ATTRIBUTES};
pub use discovery::{DiscoveryInfo, ServerDiscovery};
pub use filter::ObjectFilter;
pub use lazy::LazyResource;
pub use status::{Manifest, ManifestEntry, Status, StatusFailure};
