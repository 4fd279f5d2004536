//! Query filters for the objects and manifest endpoints.

use crate::protocol::constants::params;
use crate::protocol::{format_match_filter, match_param_name};

/// Filter applied to `objects/` and `manifest/` requests.
///
/// Each `match[...]` field accepts several values, which the server treats
/// as alternatives.
///
/// # Examples
///
/// ```
/// use taxii2_client::ObjectFilter;
///
/// let filter = ObjectFilter::new()
///     .with_type("indicator")
///     .with_type("malware")
///     .added_after("2016-02-01T00:00:01.000Z");
///
/// let query = filter.to_query();
/// assert!(query.contains(&("match[type]".to_string(), "indicator,malware".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectFilter {
    added_after: Option<String>,
    ids: Vec<String>,
    types: Vec<String>,
    versions: Vec<String>,
}

impl ObjectFilter {
    /// An empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return objects added after this timestamp.
    pub fn added_after(mut self, timestamp: impl Into<String>) -> Self {
        self.added_after = Some(timestamp.into());
        self
    }

    /// Match an object id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Match an object type.
    pub fn with_type(mut self, object_type: impl Into<String>) -> Self {
        self.types.push(object_type.into());
        self
    }

    /// Match an object version (`last`, `first`, `all` or a timestamp).
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.versions.push(version.into());
        self
    }

    /// Whether no criteria were set.
    pub fn is_empty(&self) -> bool {
        self.added_after.is_none() && self.ids.is_empty() && self.types.is_empty() && self.versions.is_empty()
    }

    /// Query parameters in a stable order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(added_after) = &self.added_after {
            query.push((params::ADDED_AFTER.to_string(), added_after.clone()));
        }
        for (field, values) in [("id", &self.ids), ("type", &self.types), ("version", &self.versions)] {
            let value = format_match_filter(values);
            if !value.is_empty() {
                query.push((match_param_name(field), value));
            }
        }
        query
    }
}
