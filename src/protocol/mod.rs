//! Protocol constants and header helpers for TAXII 2.0.
//!
//! # Key Items
//!
//! | Item | Description |
//! |------|-------------|
//! | [`MEDIA_TYPE_TAXII_V20`] | Media type of every TAXII resource document |
//! | [`MEDIA_TYPE_STIX_V20`] | Media type of STIX 2.0 bundles and objects |
//! | [`media_type_matches`] | Compare a response `Content-Type` with an `Accept` value |
//! | [`format_match_filter`] | Build the value of a `match[...]` query parameter |
//!
//! # Examples
//!
//! ```
//! use taxii2_client::protocol::{media_type_matches, MEDIA_TYPE_TAXII_V20};
//!
//! assert!(media_type_matches(
//!     MEDIA_TYPE_TAXII_V20,
//!     "application/vnd.oasis.taxii+json;version=2.0",
//! ));
//! assert!(!media_type_matches(MEDIA_TYPE_TAXII_V20, "application/json"));
//! ```

pub mod constants;
pub mod headers;

pub use constants::media_types::{MEDIA_TYPE_STIX_V20, MEDIA_TYPE_TAXII_V20};
pub use headers::{format_match_filter, match_param_name, media_type_matches, normalize_media_type};
