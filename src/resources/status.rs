//! Status and manifest documents.
//!
//! Unlike the entities in this module, these are plain snapshots: each call
//! to [`ApiRoot::get_status`](super::ApiRoot::get_status) or
//! [`Collection::get_manifest`](super::Collection::get_manifest) fetches a
//! fresh copy and nothing is cached.

use serde::{Deserialize, Serialize};

/// State of an asynchronous server-side request, as reported by the
/// `status/<id>/` endpoint of an API root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Status resource identifier.
    pub id: String,
    /// `"complete"` or `"pending"`.
    pub status: String,
    /// When the original request was received.
    #[serde(default)]
    pub request_timestamp: Option<String>,
    /// Number of objects in the original request.
    pub total_count: u64,
    /// Objects stored successfully.
    pub success_count: u64,
    /// Objects that failed.
    pub failure_count: u64,
    /// Objects not yet processed.
    pub pending_count: u64,
    /// Ids of stored objects.
    #[serde(default)]
    pub successes: Vec<String>,
    /// Failed objects with the server's reason.
    #[serde(default)]
    pub failures: Vec<StatusFailure>,
    /// Ids of objects still pending.
    #[serde(default)]
    pub pendings: Vec<String>,
}

impl Status {
    /// Whether the server has finished processing the request.
    pub fn is_complete(&self) -> bool {
        self.status == "complete"
    }
}

/// One failed object in a [`Status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFailure {
    /// Object id.
    pub id: String,
    /// Why it failed.
    #[serde(default)]
    pub message: Option<String>,
}

/// Listing of the objects in a collection, without their content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// One entry per object.
    #[serde(default)]
    pub objects: Vec<ManifestEntry>,
}

/// A single object in a [`Manifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// STIX object id.
    pub id: String,
    /// When the object was added to the collection.
    #[serde(default)]
    pub date_added: Option<String>,
    /// Available versions (modified timestamps).
    #[serde(default)]
    pub versions: Vec<String>,
    /// Media types the object can be retrieved in.
    #[serde(default)]
    pub media_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_decode() {
        let status: Status = serde_json::from_str(
            r#"{
              "id": "2d086da7-4bdc-4f91-900e-d77486753710",
              "status": "pending",
              "request_timestamp": "2016-11-02T12:34:34.12345Z",
              "total_count": 4,
              "success_count": 1,
              "successes": ["indicator--c410e480-e42b-47d1-9476-85307c12bcbf"],
              "failure_count": 1,
              "failures": [
                {"id": "malware--664fa29d-bf65-4f28-a667-bdb76f29ec98", "message": "Unable to process object"}
              ],
              "pending_count": 2,
              "pendings": [
                "indicator--252c7c11-daf2-42bd-843b-be65edca9f61",
                "relationship--045585ad-a22f-4333-af33-bfd503a683b5"
              ]
            }"#,
        )
        .unwrap();

        assert!(!status.is_complete());
        assert_eq!(status.total_count, 4);
        assert_eq!(status.failures[0].message.as_deref(), Some("Unable to process object"));
        assert_eq!(status.pendings.len(), 2);
    }

    #[test]
    fn test_status_missing_count_rejected() {
        let result: Result<Status, _> = serde_json::from_str(r#"{"id": "x", "status": "complete"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_manifest_decode() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
              "objects": [
                {
                  "id": "indicator--29aba82c-5393-42a8-9edb-6a2cb1df070b",
                  "date_added": "2016-11-01T03:04:05Z",
                  "versions": ["2016-11-03T12:30:59.000Z", "2016-12-03T12:30:59.000Z"],
                  "media_types": ["application/vnd.oasis.stix+json; version=2.0"]
                }
              ]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.objects.len(), 1);
        assert_eq!(manifest.objects[0].versions.len(), 2);

        let empty: Manifest = serde_json::from_str("{}").unwrap();
        assert!(empty.objects.is_empty());
    }
}
