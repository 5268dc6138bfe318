//! hreflang tag lookup.
//!
//! Maps configured locale identifiers to the language tags used in
//! `<link rel="alternate" hreflang=...>` metadata. The default locale's
//! canonical tag is its configured regional variant (e.g. `en-US`), not a
//! bare language code.

use crate::config::LocalesConfig;

/// The hreflang value denoting the fallback URL when no better-matching
/// locale link exists.
pub const X_DEFAULT: &str = "x-default";

/// Look up the hreflang tag for a locale.
///
/// The default locale, the empty string, and any unknown input all map to
/// the default locale's tag. Never fails.
pub fn format_hreflang<'a>(locales: &'a LocalesConfig, locale: &str) -> &'a str {
    if locale.is_empty() || locales.is_default(locale) {
        return locales.default_tag();
    }
    locales.hreflang.get(locale).map(String::as_str).unwrap_or_else(|| locales.default_tag())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_three_locales;

    #[test]
    fn test_default_locale_maps_to_regional_tag() {
        let config = test_config_three_locales();
        assert_eq!(format_hreflang(&config.locales, "en"), "en-US");
        assert_eq!(format_hreflang(&config.locales, ""), "en-US");
    }

    #[test]
    fn test_regional_locales() {
        let config = test_config_three_locales();
        assert_eq!(format_hreflang(&config.locales, "en-GB"), "en-GB");
        assert_eq!(format_hreflang(&config.locales, "en-AU"), "en-AU");
    }

    #[test]
    fn test_unknown_falls_back_to_default_tag() {
        let config = test_config_three_locales();
        assert_eq!(format_hreflang(&config.locales, "fr-FR"), "en-US");
        assert_eq!(format_hreflang(&config.locales, "garbage"), "en-US");
    }
}
