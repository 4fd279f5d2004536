//! URL and status helpers for the TAXII client.
//!
//! Every entity URL is kept in one canonical form: parsed by [`url::Url`]
//! (scheme and host lowercased, default port dropped) and ending in `/`.
//! TAXII 2.0 requires trailing slashes on all endpoints, and keeping one form
//! lets URLs from different responses be compared with plain equality.

use crate::error::{Result, TaxiiError};
use crate::protocol::constants::{paths, DEFAULT_SCHEME};
use url::Url;

/// Append `/` unless the value already ends with one.
///
/// # Examples
///
/// ```
/// use taxii2_client::client::ensure_trailing_slash;
///
/// assert_eq!(ensure_trailing_slash("https://example.com/api1"), "https://example.com/api1/");
/// assert_eq!(ensure_trailing_slash("https://example.com/api1/"), "https://example.com/api1/");
/// ```
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Parse a URL and return its canonical form, with a slash-terminated path.
///
/// The slash goes on the path, so a query or fragment is left intact.
///
/// # Errors
///
/// Returns [`TaxiiError::InvalidUrl`] when the value is not an absolute URL.
pub fn normalize_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url.trim()).map_err(|e| TaxiiError::invalid_url(url, e))?;
    canonicalize(parsed, url)
}

/// Resolve a possibly relative URL reference against a base URL.
///
/// Absolute references are returned normalized; `/api1/` or `../api1/` are
/// resolved the way a browser would.
///
/// # Examples
///
/// ```
/// use taxii2_client::client::resolve_url;
///
/// assert_eq!(
///     resolve_url("https://example.com/taxii/", "/api1/").unwrap(),
///     "https://example.com/api1/",
/// );
/// assert_eq!(
///     resolve_url("https://example.com/taxii/", "https://example.net/api2").unwrap(),
///     "https://example.net/api2/",
/// );
/// ```
pub fn resolve_url(base: &str, reference: &str) -> Result<String> {
    let base_url = Url::parse(base.trim()).map_err(|e| TaxiiError::invalid_url(base, e))?;
    let resolved = base_url
        .join(reference.trim())
        .map_err(|e| TaxiiError::invalid_url(reference, e))?;
    canonicalize(resolved, reference)
}

fn canonicalize(mut parsed: Url, original: &str) -> Result<String> {
    if parsed.cannot_be_a_base() {
        return Err(TaxiiError::invalid_url(original, "not a hierarchical URL"));
    }
    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }
    Ok(parsed.into())
}

/// Append a path segment to a base URL, keeping both slash-terminated.
///
/// # Examples
///
/// ```
/// use taxii2_client::client::join_url;
///
/// assert_eq!(
///     join_url("https://example.com/api1", "collections"),
///     "https://example.com/api1/collections/",
/// );
/// assert_eq!(
///     join_url("https://example.com/api1/", "/collections/"),
///     "https://example.com/api1/collections/",
/// );
/// ```
pub fn join_url(base: &str, segment: &str) -> String {
    let segment = segment.trim_matches('/');
    if segment.is_empty() {
        return ensure_trailing_slash(base);
    }
    format!("{}{}/", ensure_trailing_slash(base), segment)
}

/// Derive the discovery URL for a server.
///
/// A bare host (optionally with a port) maps to `https://<host>/taxii/`. A
/// value that already carries a scheme is used as given, normalized.
///
/// # Examples
///
/// ```
/// use taxii2_client::client::discovery_url;
///
/// assert_eq!(discovery_url("example.com").unwrap(), "https://example.com/taxii/");
/// assert_eq!(
///     discovery_url("http://localhost:8080/taxii").unwrap(),
///     "http://localhost:8080/taxii/",
/// );
/// ```
pub fn discovery_url(server: &str) -> Result<String> {
    let server = server.trim();
    if server.is_empty() {
        return Err(TaxiiError::invalid_url(server, "empty server address"));
    }
    if server.contains("://") {
        return normalize_url(server);
    }

    let host = server.trim_end_matches('/');
    normalize_url(&format!("{}://{}/{}", DEFAULT_SCHEME, host, paths::DISCOVERY))
}

/// Check if status code indicates success
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Check if status code indicates access denied
pub fn is_access_denied_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            normalize_url("HTTPS://Example.com:443/api1").unwrap(),
            "https://example.com/api1/"
        );
    }

    #[test]
    fn test_normalize_url_keeps_query() {
        assert_eq!(
            normalize_url("https://example.com/api1?a=1").unwrap(),
            "https://example.com/api1/?a=1"
        );
        assert_eq!(
            normalize_url("https://example.com/api1/?a=1#top").unwrap(),
            "https://example.com/api1/?a=1#top"
        );
    }

    #[test]
    fn test_resolve_url_relative() {
        let base = "http://127.0.0.1:8080/taxii/";
        assert_eq!(resolve_url(base, "/api1/").unwrap(), "http://127.0.0.1:8080/api1/");
        assert_eq!(resolve_url(base, "/api1").unwrap(), "http://127.0.0.1:8080/api1/");
        assert_eq!(resolve_url(base, "../trustgroup1/").unwrap(), "http://127.0.0.1:8080/trustgroup1/");
        assert_eq!(resolve_url(base, "api2/").unwrap(), "http://127.0.0.1:8080/taxii/api2/");
    }

    #[test]
    fn test_resolve_url_absolute() {
        assert_eq!(
            resolve_url("https://example.com/taxii/", "HTTPS://Example.net/api1").unwrap(),
            "https://example.net/api1/"
        );
    }

    #[test]
    fn test_resolve_url_invalid() {
        assert!(resolve_url("not a base", "/api1/").unwrap_err().is_construction_error());
        assert!(resolve_url("https://example.com/taxii/", "http://exa mple.com/").is_err());
    }

    #[test]
    fn test_normalize_url_invalid() {
        let err = normalize_url("not a url").unwrap_err();
        assert!(err.is_construction_error());
        assert!(normalize_url("").is_err());
        assert!(normalize_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_discovery_url_bare_host() {
        assert_eq!(discovery_url("example.com").unwrap(), "https://example.com/taxii/");
        assert_eq!(
            discovery_url("example.com:8443").unwrap(),
            "https://example.com:8443/taxii/"
        );
    }

    #[test]
    fn test_discovery_url_full() {
        assert_eq!(
            discovery_url("https://example.com/custom/discovery").unwrap(),
            "https://example.com/custom/discovery/"
        );
    }

    #[test]
    fn test_discovery_url_empty() {
        assert!(discovery_url("  ").is_err());
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://example.com/api1/collections/", "91a7b528"),
            "https://example.com/api1/collections/91a7b528/"
        );
        assert_eq!(join_url("https://example.com/api1/", ""), "https://example.com/api1/");
    }

    #[test]
    fn test_status_helpers() {
        assert!(is_success_status(200));
        assert!(is_success_status(206));
        assert!(!is_success_status(302));
        assert!(!is_success_status(404));
        assert!(is_access_denied_status(401));
        assert!(is_access_denied_status(403));
        assert!(!is_access_denied_status(404));
    }
}
