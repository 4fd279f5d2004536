//! TAXII server discovery.
//!
//! The discovery document is the entry point of a TAXII server. It names the
//! server and lists its API roots, one of which may be marked as the default.
//!
//! # Examples
//!
//! ```no_run
//! use taxii2_client::{ServerDiscovery, TaxiiClient};
//!
//! let client = TaxiiClient::new()?;
//! let server = ServerDiscovery::new("example.com", &client)?;
//!
//! println!("{}", server.title()?);
//! for root in server.api_roots()? {
//!     // Only the URL is known until a field of the root is read.
//!     println!("{}", root.url());
//! }
//! # Ok::<(), taxii2_client::TaxiiError>(())
//! ```

use crate::client::{discovery_url, resolve_url, TaxiiClient};
use crate::error::{Result, TaxiiError};
use crate::protocol::MEDIA_TYPE_TAXII_V20;
use crate::resources::api_root::ApiRoot;
use crate::resources::lazy::{Lazy, LazyResource};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct DiscoveryDocument {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    contact: Option<String>,
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    api_roots: Vec<String>,
}

/// Loaded discovery information.
#[derive(Debug)]
pub struct DiscoveryInfo {
    /// Human-readable server name.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional contact information.
    pub contact: Option<String>,
    /// API roots in response order. None of them is loaded yet.
    pub api_roots: Vec<Arc<ApiRoot>>,
    /// The default API root; always one of `api_roots`.
    pub default: Option<Arc<ApiRoot>>,
}

impl DiscoveryInfo {
    fn from_document(document: DiscoveryDocument, url: &str, client: &TaxiiClient) -> Result<Self> {
        let api_roots = document
            .api_roots
            .iter()
            .map(|root_url| {
                resolve_url(url, root_url)
                    .and_then(|root_url| ApiRoot::new(&root_url, client))
                    .map(Arc::new)
                    .map_err(|e| TaxiiError::validation("discovery", url, e))
            })
            .collect::<Result<Vec<_>>>()?;

        // Relative references resolve against the discovery URL. URLs are
        // compared in canonical form, so `.../api2` matches `.../api2/`.
        let default = document.default.as_deref().and_then(|default_url| {
            let default_url = resolve_url(url, default_url).ok()?;
            api_roots.iter().find(|root| root.url() == default_url).cloned()
        });
        if document.default.is_some() && default.is_none() {
            tracing::warn!(url, "default API root is not listed in api_roots");
        }

        Ok(DiscoveryInfo {
            title: document.title,
            description: document.description,
            contact: document.contact,
            api_roots,
            default,
        })
    }
}

/// A TAXII server's discovery document.
#[derive(Debug)]
pub struct ServerDiscovery {
    url: String,
    client: TaxiiClient,
    information: Lazy<DiscoveryInfo>,
}

impl ServerDiscovery {
    /// Create an unloaded discovery entity. No request is made.
    ///
    /// `server` is either a bare host (`example.com`, `example.com:8443`),
    /// which maps to `https://<host>/taxii/`, or a full discovery URL.
    ///
    /// # Errors
    ///
    /// [`TaxiiError::InvalidUrl`] if no URL can be built from `server`.
    pub fn new(server: &str, client: &TaxiiClient) -> Result<Self> {
        Ok(ServerDiscovery {
            url: discovery_url(server)?,
            client: client.clone(),
            information: Lazy::empty(),
        })
    }

    /// Canonical discovery URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the discovery document has been fetched.
    pub fn is_loaded(&self) -> bool {
        self.information.is_loaded()
    }

    /// Discard the cached document, including the API root list.
    pub fn refresh(&self) {
        self.information.clear();
    }

    /// All discovery information, fetching it on first use.
    pub fn information(&self) -> Result<Arc<DiscoveryInfo>> {
        self.information.get_or_try_load(|| {
            tracing::debug!(url = %self.url, "loading discovery document");
            let document: DiscoveryDocument =
                self.client
                    .get_document(&self.url, MEDIA_TYPE_TAXII_V20, "discovery")?;
            DiscoveryInfo::from_document(document, &self.url, &self.client)
        })
    }

    /// Human-readable server name.
    pub fn title(&self) -> Result<String> {
        Ok(self.information()?.title.clone())
    }

    /// Optional description.
    pub fn description(&self) -> Result<Option<String>> {
        Ok(self.information()?.description.clone())
    }

    /// Optional contact information.
    pub fn contact(&self) -> Result<Option<String>> {
        Ok(self.information()?.contact.clone())
    }

    /// API roots listed by the server, unloaded.
    pub fn api_roots(&self) -> Result<Vec<Arc<ApiRoot>>> {
        Ok(self.information()?.api_roots.clone())
    }

    /// The default API root, if the server names one that it also lists.
    ///
    /// The returned handle is the same object as the matching entry of
    /// [`api_roots`](Self::api_roots).
    pub fn default_api_root(&self) -> Result<Option<Arc<ApiRoot>>> {
        Ok(self.information()?.default.clone())
    }
}

impl LazyResource for ServerDiscovery {
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
