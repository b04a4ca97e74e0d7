use std::borrow::Cow;

/// A `country-language` prefix taken from the first path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryLangPrefix<'a> {
    pub country_code: &'a str,
    pub langcode: &'a str,
}

impl<'a> CountryLangPrefix<'a> {
    /// Parse a path segment as `country-language`.
    ///
    /// The segment must split on `-` into exactly two non-empty parts;
    /// `us`, `us-en-gb`, `-en` and `us-` are all rejected.
    pub fn parse_segment(segment: &'a str) -> Option<Self> {
        let mut parts = segment.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(country_code), Some(langcode), None)
                if !country_code.is_empty() && !langcode.is_empty() =>
            {
                Some(Self {
                    country_code,
                    langcode,
                })
            }
            _ => None,
        }
    }
}

/// Trim every leading and trailing `/` and split the rest into the first
/// segment and the tail.
///
/// An empty path yields an empty first segment and no tail.
pub fn split_path(path: &str) -> (&str, Vec<&str>) {
    let mut segments = path.trim_matches('/').split('/');
    let first = segments.next().unwrap_or_default();
    (first, segments.collect())
}

/// Percent-decode a request path, treating `+` as a space.
///
/// Bytes that do not form valid UTF-8 after decoding are replaced.
pub fn decode_path(path: &str) -> Cow<'_, str> {
    if !path.contains(['%', '+']) {
        return Cow::Borrowed(path);
    }
    let spaced = path.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_segment Tests ====================

    #[test]
    fn test_parse_segment_two_parts() {
        let prefix = CountryLangPrefix::parse_segment("us-en").expect("Should parse");
        assert_eq!(prefix.country_code, "us");
        assert_eq!(prefix.langcode, "en");
    }

    #[test]
    fn test_parse_segment_rejects_other_arity() {
        assert!(CountryLangPrefix::parse_segment("").is_none());
        assert!(CountryLangPrefix::parse_segment("en").is_none());
        assert!(CountryLangPrefix::parse_segment("us-en-gb").is_none());
        assert!(CountryLangPrefix::parse_segment("--").is_none());
    }

    #[test]
    fn test_parse_segment_rejects_empty_parts() {
        assert!(CountryLangPrefix::parse_segment("-en").is_none());
        assert!(CountryLangPrefix::parse_segment("us-").is_none());
        assert!(CountryLangPrefix::parse_segment("-").is_none());
    }

    #[test]
    fn test_parse_segment_keeps_case() {
        let prefix = CountryLangPrefix::parse_segment("US-En").expect("Should parse");
        assert_eq!(prefix.country_code, "US");
        assert_eq!(prefix.langcode, "En");
    }

    // ==================== split_path Tests ====================

    #[test]
    fn test_split_path_with_tail() {
        assert_eq!(split_path("/us-en/a/b/"), ("us-en", vec!["a", "b"]));
    }

    #[test]
    fn test_split_path_trims_repeated_slashes() {
        assert_eq!(split_path("///us-en//a///"), ("us-en", vec!["", "a"]));
    }

    #[test]
    fn test_split_path_empty() {
        assert_eq!(split_path(""), ("", vec![]));
        assert_eq!(split_path("/"), ("", vec![]));
    }

    // ==================== decode_path Tests ====================

    #[test]
    fn test_decode_path_plain_is_borrowed() {
        assert!(matches!(decode_path("us-en/products"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_path_percent_and_plus() {
        assert_eq!(decode_path("us%2Den/a+b"), "us-en/a b");
        assert_eq!(decode_path("a%2Bb"), "a+b");
    }

    #[test]
    fn test_decode_path_invalid_utf8_is_replaced() {
        assert_eq!(decode_path("%FF"), "\u{FFFD}");
    }

    #[test]
    fn test_decode_path_incomplete_escape_is_kept() {
        assert_eq!(decode_path("100%"), "100%");
    }
}
