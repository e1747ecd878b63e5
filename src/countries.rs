//! Country names for the provider's two-letter country codes, used to label
//! postal-code lookups.

use isocountry::CountryCode;

/// Full ISO 3166-1 country name for an alpha-2 code, case-insensitive
pub fn country_name(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_uppercase();
    CountryCode::for_alpha2(&code).ok().map(|country| country.name())
}

/// Country name when known, otherwise the raw code as received
pub fn display_country(code: &str) -> String {
    match country_name(code) {
        Some(name) => name.to_string(),
        None => {
            tracing::debug!("No country name for code {:?}, using it as is", code);
            code.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(country_name("FR"), Some("France"));
        assert_eq!(country_name("fr"), Some("France"));
        assert_eq!(country_name(" DE "), Some("Germany"));
        assert_eq!(country_name("IN"), Some("India"));
    }

    #[test]
    fn test_unknown_code_falls_back_to_raw() {
        assert_eq!(country_name("ZZ"), None);
        assert_eq!(display_country("ZZ"), "ZZ");
        assert_eq!(display_country(""), "");
        assert_eq!(display_country("FR"), "France");
    }
}
