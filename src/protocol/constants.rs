//! Fixed protocol strings.

/// Media types defined by TAXII 2.0 and STIX 2.0.
pub mod media_types {
    /// TAXII 2.0 resources: discovery, API root, collections, manifest, status.
    pub const MEDIA_TYPE_TAXII_V20: &str = "application/vnd.oasis.taxii+json; version=2.0";

    /// STIX 2.0 content: bundles returned by the objects endpoints.
    pub const MEDIA_TYPE_STIX_V20: &str = "application/vnd.oasis.stix+json; version=2.0";
}

/// Request header names.
pub mod headers {
    /// Optional per-request protocol version.
    pub const VERSION: &str = "Version";
}

/// Path segments appended to resource URLs.
pub mod paths {
    /// Default discovery path on a bare host.
    pub const DISCOVERY: &str = "taxii/";
    /// Collections endpoint below an API root.
    pub const COLLECTIONS: &str = "collections/";
    /// Status endpoint below an API root.
    pub const STATUS: &str = "status/";
    /// Objects endpoint below a collection.
    pub const OBJECTS: &str = "objects/";
    /// Manifest endpoint below a collection.
    pub const MANIFEST: &str = "manifest/";
}

/// Query parameter names used for filtering.
pub mod params {
    /// Only return objects added after this timestamp.
    pub const ADDED_AFTER: &str = "added_after";
}

/// Scheme used when a server is given as a bare host.
pub const DEFAULT_SCHEME: &str = "https";
