//! The HTTP facade shared by every TAXII entity.
//!
//! [`TaxiiClient`] issues authenticated, blocking GET requests with a
//! required `Accept` media type and hands back parsed JSON. It rejects
//! anything that is not a 2xx answer in the requested media type.
//!
//! # Examples
//!
//! ```no_run
//! use taxii2_client::client::{ClientConfig, TaxiiClient};
//! use taxii2_client::protocol::MEDIA_TYPE_TAXII_V20;
//!
//! let client = TaxiiClient::with_config(ClientConfig::with_basic_auth("analyst", "secret"))?;
//! let discovery = client.get("https://example.com/taxii/", MEDIA_TYPE_TAXII_V20)?;
//! println!("{}", discovery["title"]);
//! # Ok::<(), taxii2_client::TaxiiError>(())
//! ```

use crate::client::config::ClientConfig;
use crate::client::request::TaxiiRequest;
use crate::client::utils::{is_access_denied_status, is_success_status};
use crate::error::{Result, TaxiiError};
use crate::protocol::constants::headers;
use crate::protocol::media_type_matches;
use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::blocking::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Blocking TAXII HTTP client.
///
/// Cloning is cheap: clones share the connection pool and configuration, so
/// one client can back any number of entities.
#[derive(Clone, Debug)]
pub struct TaxiiClient {
    client: reqwest::blocking::Client,
    config: Arc<ClientConfig>,
}

impl TaxiiClient {
    /// Create a client without credentials.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// [`TaxiiError::Config`] if the proxy URL or an extra header is invalid,
    /// or the TLS backend cannot be initialized.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.extra_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TaxiiError::Config(format!("header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| TaxiiError::Config(format!("header '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify);

        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| TaxiiError::Config(format!("proxy '{}': {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| TaxiiError::Config(e.to_string()))?;

        Ok(TaxiiClient {
            client,
            config: Arc::new(config),
        })
    }

    /// GET a resource and return its JSON body.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL of the resource
    /// * `accept` - Media type sent in `Accept` and required in the response `Content-Type`
    pub fn get(&self, url: &str, accept: &str) -> Result<Value> {
        self.get_with(url, accept, &TaxiiRequest::new())
    }

    /// GET a resource with query parameters and return its JSON body.
    pub fn get_with_query(&self, url: &str, accept: &str, query: &[(String, String)]) -> Result<Value> {
        self.get_with(url, accept, &TaxiiRequest::new().with_query(query.to_vec()))
    }

    /// GET a resource with per-request options and return its JSON body.
    ///
    /// Query parameters from `request` are appended to `url`, and its
    /// version, if set, is sent as the `Version` header.
    pub fn get_with(&self, url: &str, accept: &str, request: &TaxiiRequest) -> Result<Value> {
        tracing::debug!(
            url,
            accept,
            params = request.query.len(),
            version = request.version.as_deref(),
            "GET"
        );

        let mut builder = self.client.get(url).header(ACCEPT, accept);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(version) = &request.version {
            builder = builder.header(headers::VERSION, version.as_str());
        }
        let response = self.authorize(builder).send()?;

        let status = response.status().as_u16();
        if !is_success_status(status) {
            if is_access_denied_status(status) {
                tracing::warn!(url, status, "access denied, check client credentials");
            } else {
                tracing::warn!(url, status, "request rejected");
            }
            return Err(TaxiiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !media_type_matches(accept, &content_type) {
            tracing::warn!(url, expected = accept, actual = %content_type, "content type mismatch");
            return Err(TaxiiError::ContentType {
                url: url.to_string(),
                expected: accept.to_string(),
                actual: content_type,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| TaxiiError::validation("JSON", url, e))
    }

    /// GET a resource and decode it into a typed document.
    ///
    /// Decoding failures (missing or mistyped fields) are reported as
    /// [`TaxiiError::Validation`] naming `resource`.
    pub fn get_document<T: DeserializeOwned>(
        &self,
        url: &str,
        accept: &str,
        resource: &'static str,
    ) -> Result<T> {
        self.get_document_with(url, accept, &TaxiiRequest::new(), resource)
    }

    /// Typed variant of [`get_with_query`](Self::get_with_query).
    pub fn get_document_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        accept: &str,
        query: &[(String, String)],
        resource: &'static str,
    ) -> Result<T> {
        let request = TaxiiRequest::new().with_query(query.to_vec());
        self.get_document_with(url, accept, &request, resource)
    }

    /// Typed variant of [`get_with`](Self::get_with).
    pub fn get_document_with<T: DeserializeOwned>(
        &self,
        url: &str,
        accept: &str,
        request: &TaxiiRequest,
        resource: &'static str,
    ) -> Result<T> {
        let value = self.get_with(url, accept, request)?;
        serde_json::from_value(value).map_err(|e| TaxiiError::validation(resource, url, e))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.config.token {
            request.bearer_auth(token)
        } else if let Some(username) = &self.config.username {
            request.basic_auth(username, self.config.password.as_ref())
        } else {
            request
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
