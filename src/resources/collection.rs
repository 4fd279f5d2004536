//! TAXII collections.
//!
//! A [`Collection`] is obtained in one of three ways:
//!
//! | Constructor | Loaded? | Typical use |
//! |-------------|---------|-------------|
//! | [`Collection::new`] | no, fetches on first access | caller knows the collection URL |
//! | [`Collection::from_info`] | yes | caller already holds the metadata |
//! | [`Collection::from_attributes`] | when metadata is supplied | metadata from a loosely-typed source (config file, form input) |
//!
//! Collections returned by [`ApiRoot::collections`](super::ApiRoot::collections)
//! are built pre-loaded from the collections endpoint.
//!
//! # Examples
//!
//! ```no_run
//! use taxii2_client::{Collection, ObjectFilter, TaxiiClient};
//!
//! let client = TaxiiClient::new()?;
//! let collection = Collection::new(
//!     "https://example.com/api1/collections/91a7b528-80eb-42ed-a74d-c6fbd5a26116/",
//!     &client,
//! )?;
//!
//! if collection.can_read()? {
//!     let bundle = collection.get_objects(&ObjectFilter::new().with_type("indicator"))?;
//!     println!("{}", bundle["objects"]);
//! }
//! # Ok::<(), taxii2_client::TaxiiError>(())
//! ```

use crate::client::{join_url, normalize_url, TaxiiClient};
use crate::error::{Result, TaxiiError};
use crate::protocol::constants::paths;
use crate::protocol::{MEDIA_TYPE_STIX_V20, MEDIA_TYPE_TAXII_V20};
use crate::resources::filter::ObjectFilter;
use crate::resources::lazy::{Lazy, LazyResource};
use crate::resources::status::Manifest;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Attribute names accepted by [`Collection::from_attributes`].
pub const COLLECTION_ATTRIBUTES: &[&str] = &[
    "url",
    "id",
    "title",
    "description",
    "can_read",
    "can_write",
    "media_types",
];

const REQUIRED_METADATA: &[&str] = &["id", "title", "can_read", "can_write"];

fn default_media_types() -> Vec<String> {
    vec![MEDIA_TYPE_STIX_V20.to_string()]
}

/// Collection metadata as served by TAXII 2.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Collection identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the client may read objects.
    pub can_read: bool,
    /// Whether the client may add objects.
    pub can_write: bool,
    /// Media types of the objects; STIX 2.0 when the server omits the field.
    #[serde(default = "default_media_types")]
    pub media_types: Vec<String>,
}

/// A TAXII collection.
#[derive(Debug)]
pub struct Collection {
    url: String,
    client: TaxiiClient,
    information: Lazy<CollectionInfo>,
}

impl Collection {
    /// Create an unloaded collection. No request is made.
    ///
    /// # Errors
    ///
    /// [`TaxiiError::InvalidUrl`] if `url` is not an absolute URL.
    pub fn new(url: &str, client: &TaxiiClient) -> Result<Self> {
        Ok(Collection {
            url: normalize_url(url)?,
            client: client.clone(),
            information: Lazy::empty(),
        })
    }

    /// Create a collection that is already loaded with `info`.
    pub fn from_info(url: &str, client: &TaxiiClient, info: CollectionInfo) -> Result<Self> {
        Ok(Self::preloaded(normalize_url(url)?, client, info))
    }

    pub(crate) fn preloaded(url: String, client: &TaxiiClient, info: CollectionInfo) -> Self {
        Collection {
            url,
            client: client.clone(),
            information: Lazy::loaded(info),
        }
    }

    /// Create a collection from named attributes.
    ///
    /// Every name must be one of [`COLLECTION_ATTRIBUTES`]; anything else is
    /// rejected with [`TaxiiError::UnknownAttribute`] before the remaining
    /// attributes are looked at. `url` is mandatory. If any metadata attribute
    /// is present, `id`, `title`, `can_read` and `can_write` must be too and
    /// the collection is returned loaded; otherwise it is returned unloaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use taxii2_client::{Collection, TaxiiClient};
    ///
    /// let client = TaxiiClient::new().unwrap();
    ///
    /// let err = Collection::from_attributes(
    ///     &client,
    ///     [("url", json!("https://example.com/api1/collections/1/")), ("foo", json!("bar"))],
    /// )
    /// .unwrap_err();
    /// assert!(err.is_construction_error());
    /// ```
    pub fn from_attributes<I, K>(client: &TaxiiClient, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut fields = Map::new();
        for (name, value) in attributes {
            let name = name.into();
            if name == "client" {
                return Err(TaxiiError::InvalidAttribute {
                    name,
                    message: "the client is passed as an argument".into(),
                });
            }
            if !COLLECTION_ATTRIBUTES.contains(&name.as_str()) {
                return Err(TaxiiError::UnknownAttribute(name));
            }
            fields.insert(name, value);
        }

        let url = match fields.remove("url") {
            Some(Value::String(url)) => normalize_url(&url)?,
            Some(other) => {
                return Err(TaxiiError::InvalidAttribute {
                    name: "url".into(),
                    message: format!("expected a string, got {}", other),
                })
            }
            None => return Err(TaxiiError::MissingAttribute("url")),
        };

        if fields.is_empty() {
            return Ok(Collection {
                url,
                client: client.clone(),
                information: Lazy::empty(),
            });
        }

        if let Some(missing) = REQUIRED_METADATA.iter().copied().find(|name| !fields.contains_key(*name)) {
            return Err(TaxiiError::MissingAttribute(missing));
        }
        let info: CollectionInfo =
            serde_json::from_value(Value::Object(fields)).map_err(|e| TaxiiError::InvalidAttribute {
                name: "collection".into(),
                message: e.to_string(),
            })?;

        Ok(Self::preloaded(url, client, info))
    }

    /// Canonical URL of the collection.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the collection metadata has been fetched.
    pub fn is_loaded(&self) -> bool {
        self.information.is_loaded()
    }

    /// Discard cached metadata.
    pub fn refresh(&self) {
        self.information.clear();
    }

    /// All metadata, fetching it on first use.
    pub fn information(&self) -> Result<Arc<CollectionInfo>> {
        self.information.get_or_try_load(|| {
            tracing::debug!(url = %self.url, "loading collection");
            self.client
                .get_document(&self.url, MEDIA_TYPE_TAXII_V20, "collection")
        })
    }

    /// Collection identifier.
    pub fn id(&self) -> Result<String> {
        Ok(self.information()?.id.clone())
    }

    /// Human-readable title.
    pub fn title(&self) -> Result<String> {
        Ok(self.information()?.title.clone())
    }

    /// Optional description.
    pub fn description(&self) -> Result<Option<String>> {
        Ok(self.information()?.description.clone())
    }

    /// Whether the client may read objects from the collection.
    pub fn can_read(&self) -> Result<bool> {
        Ok(self.information()?.can_read)
    }

    /// Whether the client may add objects to the collection.
    pub fn can_write(&self) -> Result<bool> {
        Ok(self.information()?.can_write)
    }

    /// Media types of the objects in the collection.
    pub fn media_types(&self) -> Result<Vec<String>> {
        Ok(self.information()?.media_types.clone())
    }

    /// Fetch a STIX bundle of objects from the collection.
    ///
    /// # Errors
    ///
    /// [`TaxiiError::AccessDenied`] before any object request if the
    /// collection is not readable.
    pub fn get_objects(&self, filter: &ObjectFilter) -> Result<Value> {
        self.verify_can_read()?;
        let url = join_url(&self.url, paths::OBJECTS);
        self.client
            .get_with_query(&url, MEDIA_TYPE_STIX_V20, &filter.to_query())
    }

    /// Fetch every version of one object matching `filter` as a STIX bundle.
    pub fn get_object(&self, object_id: &str, filter: &ObjectFilter) -> Result<Value> {
        self.verify_can_read()?;
        let url = join_url(&join_url(&self.url, paths::OBJECTS), object_id);
        self.client
            .get_with_query(&url, MEDIA_TYPE_STIX_V20, &filter.to_query())
    }

    /// Fetch the manifest of objects in the collection.
    pub fn get_manifest(&self, filter: &ObjectFilter) -> Result<Manifest> {
        self.verify_can_read()?;
        let url = join_url(&self.url, paths::MANIFEST);
        self.client
            .get_document_with_query(&url, MEDIA_TYPE_TAXII_V20, &filter.to_query(), "manifest")
    }

    fn verify_can_read(&self) -> Result<()> {
        if self.can_read()? {
            Ok(())
        } else {
            Err(TaxiiError::AccessDenied {
                collection: self.url.clone(),
                access: "reading",
            })
        }
    }
}

impl LazyResource for Collection {
    fn url(&self) -> &str {
        &self.url
    }

    fn is_loaded(&self) -> bool {
        self.information.is_loaded()
    }

    fn ensure_loaded(&self) -> Result<()> {
        self.information().map(|_| ())
    }

    fn refresh(&self) {
        self.information.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLLECTION_URL: &str = "https://example.com/api1/collections/91a7b528-80eb-42ed-a74d-c6fbd5a26116/";

    fn client() -> TaxiiClient {
        TaxiiClient::new().unwrap()
    }

    #[test]
    fn test_new_is_unloaded() {
        let collection = Collection::new(COLLECTION_URL, &client()).unwrap();
        assert!(!collection.is_loaded());
        assert_eq!(collection.url(), COLLECTION_URL);
    }

    #[test]
    fn test_new_normalizes_url() {
        let collection = Collection::new("https://example.com/api1/collections/abc", &client()).unwrap();
        assert_eq!(collection.url(), "https://example.com/api1/collections/abc/");
    }

    #[test]
    fn test_new_rejects_bad_url() {
        assert!(Collection::new("", &client()).unwrap_err().is_construction_error());
    }

    #[test]
    fn test_info_media_types_default() {
        let info: CollectionInfo = serde_json::from_value(json!({
            "id": "abc",
            "title": "Indicators",
            "can_read": true,
            "can_write": false
        }))
        .unwrap();
        assert_eq!(info.media_types, vec![MEDIA_TYPE_STIX_V20.to_string()]);
        assert_eq!(info.description, None);
    }

    #[test]
    fn test_info_missing_flag_rejected() {
        let result: std::result::Result<CollectionInfo, _> =
            serde_json::from_value(json!({"id": "abc", "title": "Indicators", "can_read": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_attributes_unknown() {
        let err = Collection::from_attributes(&client(), [("url", json!("")), ("foo", json!("bar"))]).unwrap_err();
        assert!(matches!(err, TaxiiError::UnknownAttribute(ref name) if name == "foo"));
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_from_attributes_client_rejected() {
        let err = Collection::from_attributes(&client(), [("client", json!(null))]).unwrap_err();
        assert!(matches!(err, TaxiiError::InvalidAttribute { .. }));
    }

    #[test]
    fn test_from_attributes_url_only() {
        let collection = Collection::from_attributes(&client(), [("url", json!(COLLECTION_URL))]).unwrap();
        assert!(!collection.is_loaded());
    }

    #[test]
    fn test_from_attributes_missing_url() {
        let err = Collection::from_attributes(&client(), [("id", json!("abc"))]).unwrap_err();
        assert!(matches!(err, TaxiiError::MissingAttribute("url")));
    }

    #[test]
    fn test_from_attributes_partial_metadata() {
        let err = Collection::from_attributes(
            &client(),
            [("url", json!(COLLECTION_URL)), ("id", json!("abc")), ("title", json!("t"))],
        )
        .unwrap_err();
        assert!(matches!(err, TaxiiError::MissingAttribute("can_read")));
    }

    #[test]
    fn test_from_attributes_wrong_type() {
        let err = Collection::from_attributes(
            &client(),
            [
                ("url", json!(COLLECTION_URL)),
                ("id", json!("abc")),
                ("title", json!("t")),
                ("can_read", json!("yes")),
                ("can_write", json!(false)),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, TaxiiError::InvalidAttribute { .. }));
    }

    #[test]
    fn test_from_attributes_full_is_loaded() {
        let collection = Collection::from_attributes(
            &client(),
            [
                ("url", json!(COLLECTION_URL)),
                ("id", json!("91a7b528-80eb-42ed-a74d-c6fbd5a26116")),
                ("title", json!("High Value Indicator Collection")),
                ("can_read", json!(true)),
                ("can_write", json!(false)),
            ],
        )
        .unwrap();

        assert!(collection.is_loaded());
        assert_eq!(collection.id().unwrap(), "91a7b528-80eb-42ed-a74d-c6fbd5a26116");
        assert_eq!(collection.media_types().unwrap(), vec![MEDIA_TYPE_STIX_V20.to_string()]);
    }

    #[test]
    fn test_unreadable_collection_denied_without_request() {
        let info = CollectionInfo {
            id: "abc".into(),
            title: "Write only".into(),
            description: None,
            can_read: false,
            can_write: true,
            media_types: default_media_types(),
        };
        // Port 1 is never listening; reaching the network would surface an Http error.
        let collection = Collection::from_info("http://127.0.0.1:1/api1/collections/abc/", &client(), info).unwrap();

        let err = collection.get_objects(&ObjectFilter::new()).unwrap_err();
        assert!(matches!(err, TaxiiError::AccessDenied { access: "reading", .. }));
        assert!(collection.get_manifest(&ObjectFilter::new()).is_err());
    }

    #[test]
    fn test_refresh_unloads() {
        let collection = Collection::from_attributes(
            &client(),
            [
                ("url", json!(COLLECTION_URL)),
                ("id", json!("abc")),
                ("title", json!("t")),
                ("can_read", json!(true)),
                ("can_write", json!(true)),
            ],
        )
        .unwrap();
        assert!(LazyResource::is_loaded(&collection));
        LazyResource::refresh(&collection);
        assert!(!collection.is_loaded());
    }
}
