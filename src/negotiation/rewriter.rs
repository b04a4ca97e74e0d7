use super::prefix::{split_path, CountryLangPrefix};

/// Drop a `country-language` prefix from an inbound path.
///
/// Only the shape of the first segment is checked; the codes are not looked
/// up. A path without a well-formed prefix is returned byte for byte.
pub fn process_inbound(path: &str) -> String {
    let (prefix, tail) = split_path(path);
    if CountryLangPrefix::parse_segment(prefix).is_none() {
        return path.to_string();
    }
    format!("/{}", tail.join("/"))
}
