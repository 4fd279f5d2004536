//! Per-request options for [`TaxiiClient`](super::TaxiiClient) GETs.

/// Options that vary from one request to the next.
///
/// Connection-wide settings (credentials, proxy, timeout) live in
/// [`ClientConfig`](super::ClientConfig); this carries what a single call adds.
///
/// # Examples
///
/// ```
/// use taxii2_client::client::TaxiiRequest;
///
/// let request = TaxiiRequest::new()
///     .with_param("added_after", "2016-02-01T00:00:01.000Z")
///     .with_version("2.0");
/// assert_eq!(request.version.as_deref(), Some("2.0"));
/// assert_eq!(request.query.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxiiRequest {
    /// Query parameters, sent in order.
    pub query: Vec<(String, String)>,
    /// Value of the `Version` request header, if any.
    pub version: Option<String>,
}

impl TaxiiRequest {
    /// A request with no query parameters and no version header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one query parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append several query parameters.
    pub fn with_query(mut self, query: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Send a `Version` header with this request.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}
