//! TAXII API roots.
//!
//! An API root has two independently cached facets: its own information
//! (title, versions, size limit) and the list of collections it hosts. Each
//! is fetched the first time it is read and refreshed separately.

use crate::client::{join_url, normalize_url, TaxiiClient};
use crate::error::{Result, TaxiiError};
use crate::protocol::constants::paths;
use crate::protocol::MEDIA_TYPE_TAXII_V20;
use crate::resources::collection::{Collection, CollectionInfo};
use crate::resources::lazy::{Lazy, LazyResource};
use crate::resources::status::Status;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// API root information as served by TAXII 2.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRootInfo {
    /// Human-readable title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Supported protocol versions, e.g. `taxii-2.0`.
    pub versions: Vec<String>,
    /// Largest request body the server accepts, in bytes.
    pub max_content_length: u64,
}

#[derive(Deserialize)]
struct CollectionsDocument {
    #[serde(default)]
    collections: Vec<CollectionInfo>,
}

/// A TAXII API root.
#[derive(Debug)]
pub struct ApiRoot {
    url: String,
    client: TaxiiClient,
    information: Lazy<ApiRootInfo>,
    collections: Lazy<Vec<Arc<Collection>>>,
}

impl ApiRoot {
    /// Create an unloaded API root. No request is made.
    ///
    /// # Errors
    ///
    /// [`TaxiiError::InvalidUrl`] if `url` is not an absolute URL.
    pub fn new(url: &str, client: &TaxiiClient) -> Result<Self> {
        Ok(ApiRoot {
            url: normalize_url(url)?,
            client: client.clone(),
            information: Lazy::empty(),
            collections: Lazy::empty(),
        })
    }

    /// Canonical URL of the API root.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the API root information has been fetched.
    pub fn is_loaded(&self) -> bool {
        self.information.is_loaded()
    }

    /// Whether the collections list has been fetched.
    pub fn collections_loaded(&self) -> bool {
        self.collections.is_loaded()
    }

    /// Discard cached information. The collections list is kept.
    pub fn refresh_information(&self) {
        self.information.clear();
    }

    /// Discard the cached collections list. Information is kept.
    pub fn refresh_collections(&self) {
        self.collections.clear();
    }

    /// Discard both information and collections.
    pub fn refresh(&self) {
        self.refresh_information();
        self.refresh_collections();
    }

    /// All API root information, fetching it on first use.
    pub fn information(&self) -> Result<Arc<ApiRootInfo>> {
        self.information.get_or_try_load(|| {
            tracing::debug!(url = %self.url, "loading API root information");
            self.client
                .get_document(&self.url, MEDIA_TYPE_TAXII_V20, "API root")
        })
    }

    /// Human-readable title.
    pub fn title(&self) -> Result<String> {
        Ok(self.information()?.title.clone())
    }

    /// Optional description.
    pub fn description(&self) -> Result<Option<String>> {
        Ok(self.information()?.description.clone())
    }

    /// Supported protocol versions.
    pub fn versions(&self) -> Result<Vec<String>> {
        Ok(self.information()?.versions.clone())
    }

    /// Largest request body the server accepts, in bytes.
    pub fn max_content_length(&self) -> Result<u64> {
        Ok(self.information()?.max_content_length)
    }

    /// Collections hosted by this API root, fetched on first use.
    ///
    /// The collections endpoint returns full metadata for every collection,
    /// so the returned entities are already loaded.
    pub fn collections(&self) -> Result<Vec<Arc<Collection>>> {
        let collections = self.collections.get_or_try_load(|| {
            let url = join_url(&self.url, paths::COLLECTIONS);
            tracing::debug!(url = %url, "loading collections");

            let document: CollectionsDocument =
                self.client
                    .get_document(&url, MEDIA_TYPE_TAXII_V20, "collections")?;

            Ok(document
                .collections
                .into_iter()
                .map(|info| {
                    let collection_url = join_url(&url, &info.id);
                    Arc::new(Collection::preloaded(collection_url, &self.client, info))
                })
                .collect())
        })?;
        Ok((*collections).clone())
    }

    /// Fetch the status of an asynchronous request.
    ///
    /// Status documents are not cached; every call makes a request.
    pub fn get_status(&self, status_id: &str) -> Result<Status> {
        if status_id.trim().is_empty() {
            return Err(TaxiiError::InvalidAttribute {
                name: "status_id".into(),
                message: "must not be empty".into(),
            });
        }
        let url = join_url(&join_url(&self.url, paths::STATUS), status_id);
        self.client.get_document(&url, MEDIA_TYPE_TAXII_V20, "status")
    }
}

impl LazyResource for ApiRoot {
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
        ApiRoot::refresh(self);
    }
}
