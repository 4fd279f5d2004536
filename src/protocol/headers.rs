//! Media-type comparison and filter parameter formatting.
//!
//! TAXII 2.0 identifies every resource by a versioned media type such as
//! `application/vnd.oasis.taxii+json; version=2.0`. Servers are not
//! consistent about whitespace or case in the parameters, so comparison is
//! done on a normalized form.
//!
//! # Header Formats
//!
//! | Header / parameter | Format | Example |
//! |--------------------|--------|---------|
//! | Accept / Content-Type | `type/subtype; key=value` | `application/vnd.oasis.stix+json; version=2.0` |
//! | `match[<field>]` | comma-separated values | `match[type]=indicator,malware` |

/// Normalize a media type for comparison.
///
/// Lowercases the value, strips whitespace around `;` and `=`, and drops
/// empty parameters.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::normalize_media_type;
///
/// assert_eq!(
///     normalize_media_type("Application/Vnd.Oasis.Taxii+JSON ;  Version = 2.0;"),
///     "application/vnd.oasis.taxii+json;version=2.0",
/// );
/// ```
pub fn normalize_media_type(value: &str) -> String {
    value
        .split(';')
        .map(|part| {
            part.split('=')
                .map(|piece| piece.trim().to_ascii_lowercase())
                .collect::<Vec<_>>()
                .join("=")
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(";")
}

/// Check a response `Content-Type` against the media type that was requested.
///
/// The type, subtype and every parameter of `expected` must be present in
/// `actual`. Extra parameters on the response (e.g. `charset=utf-8`) are
/// accepted.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::media_type_matches;
///
/// let taxii = "application/vnd.oasis.taxii+json; version=2.0";
/// assert!(media_type_matches(taxii, "application/vnd.oasis.taxii+json; version=2.0; charset=utf-8"));
/// assert!(!media_type_matches(taxii, "application/vnd.oasis.taxii+json; version=2.1"));
/// assert!(!media_type_matches(taxii, ""));
/// ```
pub fn media_type_matches(expected: &str, actual: &str) -> bool {
    let expected = normalize_media_type(expected);
    let actual = normalize_media_type(actual);

    let mut expected_parts = expected.split(';');
    let mut actual_parts = actual.split(';');

    if expected_parts.next() != actual_parts.next() {
        return false;
    }

    let actual_params: Vec<&str> = actual_parts.collect();
    expected_parts.all(|param| actual_params.contains(&param))
}

/// Name of the `match[...]` query parameter for a field.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::match_param_name;
///
/// assert_eq!(match_param_name("type"), "match[type]");
/// ```
#[inline]
pub fn match_param_name(field: &str) -> String {
    format!("match[{}]", field)
}

/// Join filter values into the comma-separated form TAXII expects.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::format_match_filter;
///
/// let values = vec!["indicator".to_string(), "malware".to_string()];
/// assert_eq!(format_match_filter(&values), "indicator,malware");
/// ```
pub fn format_match_filter(values: &[String]) -> String {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{MEDIA_TYPE_STIX_V20, MEDIA_TYPE_TAXII_V20};

    #[test]
    fn test_normalize_media_type() {
        assert_eq!(
            normalize_media_type(MEDIA_TYPE_TAXII_V20),
            "application/vnd.oasis.taxii+json;version=2.0"
        );
    }

    #[test]
    fn test_normalize_media_type_no_params() {
        assert_eq!(normalize_media_type(" Application/JSON "), "application/json");
    }

    #[test]
    fn test_media_type_matches_exact() {
        assert!(media_type_matches(MEDIA_TYPE_TAXII_V20, MEDIA_TYPE_TAXII_V20));
        assert!(media_type_matches(MEDIA_TYPE_STIX_V20, MEDIA_TYPE_STIX_V20));
    }

    #[test]
    fn test_media_type_matches_spacing() {
        assert!(media_type_matches(
            MEDIA_TYPE_TAXII_V20,
            "application/vnd.oasis.taxii+json;version=2.0"
        ));
    }

    #[test]
    fn test_media_type_matches_extra_params() {
        assert!(media_type_matches(
            MEDIA_TYPE_STIX_V20,
            "application/vnd.oasis.stix+json; charset=utf-8; version=2.0"
        ));
    }

    #[test]
    fn test_media_type_mismatch() {
        assert!(!media_type_matches(MEDIA_TYPE_TAXII_V20, MEDIA_TYPE_STIX_V20));
        assert!(!media_type_matches(MEDIA_TYPE_TAXII_V20, "application/vnd.oasis.taxii+json"));
        assert!(!media_type_matches(MEDIA_TYPE_TAXII_V20, "application/json"));
    }

    #[test]
    fn test_format_match_filter_skips_blanks() {
        let values = vec!["a".to_string(), " ".to_string(), " b ".to_string()];
        assert_eq!(format_match_filter(&values), "a,b");
    }

    #[test]
    fn test_match_param_name() {
        assert_eq!(match_param_name("version"), "match[version]");
    }
}
