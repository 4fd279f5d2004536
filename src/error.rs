//! Error types for TAXII client operations.
//!
//! Every failure falls into one of three classes:
//!
//! | Class | Variants | Raised when |
//! |-------|----------|-------------|
//! | Request | `Http`, `Status`, `ContentType`, `AccessDenied` | the server could not be reached or answered with something other than the expected 2xx document |
//! | Validation | `Validation` | a 2xx response is not JSON or lacks a required field |
//! | Construction | `UnknownAttribute`, `MissingAttribute`, `InvalidAttribute`, `InvalidUrl`, `Config` | an entity or client was built from bad input, before any request |
//!
//! None of them are retried by the library. A failed fetch leaves the entity
//! unloaded, so reading the field again repeats the request.

use thiserror::Error;

/// Result type alias for TAXII client operations.
pub type Result<T> = std::result::Result<T, TaxiiError>;

/// Errors that can occur while talking to a TAXII 2.0 server.
#[derive(Error, Debug)]
pub enum TaxiiError {
    /// Transport-level failure (connection refused, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response `Content-Type` did not match the requested media type.
    #[error("unexpected content type from {url}: expected '{expected}', got '{actual}'")]
    ContentType {
        /// Requested URL.
        url: String,
        /// Media type sent in `Accept`.
        expected: String,
        /// Media type the server returned (empty when missing).
        actual: String,
    },

    /// The collection does not allow the requested access.
    #[error("collection {collection} does not allow {access}")]
    AccessDenied {
        /// Collection URL.
        collection: String,
        /// `"reading"` or `"writing"`.
        access: &'static str,
    },

    /// A successful response could not be decoded into the expected document.
    #[error("invalid {resource} response from {url}: {message}")]
    Validation {
        /// Kind of document being decoded.
        resource: &'static str,
        /// Requested URL.
        url: String,
        /// Decoder message.
        message: String,
    },

    /// An entity was constructed with an attribute it does not recognize.
    #[error("unexpected attribute `{0}`")]
    UnknownAttribute(String),

    /// An entity was constructed without a mandatory attribute.
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),

    /// An attribute was supplied with a value of the wrong shape.
    #[error("invalid value for attribute `{name}`: {message}")]
    InvalidAttribute {
        /// Attribute name.
        name: String,
        /// What was wrong with it.
        message: String,
    },

    /// A URL could not be parsed.
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending input.
        url: String,
        /// Parser message.
        message: String,
    },

    /// The client configuration is unusable.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl TaxiiError {
    pub(crate) fn validation(resource: &'static str, url: &str, err: impl std::fmt::Display) -> Self {
        TaxiiError::Validation {
            resource,
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid_url(url: &str, err: impl std::fmt::Display) -> Self {
        TaxiiError::InvalidUrl {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// Transport failure, bad status, wrong content type or denied access.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            TaxiiError::Http(_)
                | TaxiiError::Status { .. }
                | TaxiiError::ContentType { .. }
                | TaxiiError::AccessDenied { .. }
        )
    }

    /// A 2xx response that did not decode into the expected document.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, TaxiiError::Validation { .. })
    }

    /// Bad input at construction time, raised before any network activity.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            TaxiiError::UnknownAttribute(_)
                | TaxiiError::MissingAttribute(_)
                | TaxiiError::InvalidAttribute { .. }
                | TaxiiError::InvalidUrl { .. }
                | TaxiiError::Config(_)
        )
    }

    /// Status code of a non-2xx response, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            TaxiiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TaxiiError {
    fn from(err: reqwest::Error) -> Self {
        TaxiiError::Http(err.to_string())
    }
}
