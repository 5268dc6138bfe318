//! `[locales]` section configuration.
//!
//! The locale set is immutable process-wide state: exactly one default
//! locale (whose URLs carry no prefix), zero or more regional variants,
//! and the availability policy for content-type segments.
//!
//! # Example
//!
//! ```toml
//! [locales]
//! default = "en"
//! supported = ["en", "en-GB", "en-AU"]
//!
//! [locales.hreflang]
//! en = "en-US"
//! en-GB = "en-GB"
//! en-AU = "en-AU"
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Content-type segments served in every locale when nothing else is
/// configured. Segments outside this list are default-locale only.
pub const DEFAULT_SHARED_SEGMENTS: &[&str] = &[
    "article",
    "ebook",
    "podcast",
    "webinar",
    "case-study",
    "press-release",
    "topic",
    "browse",
    "author",
    "testimonial",
    "about",
];

/// Locale set and availability policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// The default locale. Its URLs carry no prefix.
    pub default: String,

    /// All supported locale identifiers, default included.
    pub supported: Vec<String>,

    /// Locale identifier -> hreflang language tag.
    pub hreflang: FxHashMap<String, String>,

    /// Content-type segments available across all locales.
    pub shared_segments: Vec<String>,

    /// Locales restricted to the root path only. Normally empty.
    pub root_only: Vec<String>,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        let mut hreflang = FxHashMap::default();
        hreflang.insert("en".to_string(), "en-US".to_string());

        Self {
            default: "en".to_string(),
            supported: vec!["en".to_string()],
            hreflang,
            shared_segments: DEFAULT_SHARED_SEGMENTS.iter().map(ToString::to_string).collect(),
            root_only: Vec::new(),
        }
    }
}

impl LocalesConfig {
    /// Check membership in the configured locale set.
    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported.iter().any(|l| l == locale)
    }

    /// Check whether `locale` is the default locale.
    pub fn is_default(&self, locale: &str) -> bool {
        locale == self.default
    }

    /// Check whether `locale` is restricted to the root path.
    pub fn is_root_only(&self, locale: &str) -> bool {
        self.root_only.iter().any(|l| l == locale)
    }

    /// Check whether a content-type segment is available for all locales.
    pub fn is_shared_segment(&self, segment: &str) -> bool {
        self.shared_segments.iter().any(|s| s == segment)
    }

    /// The hreflang tag of the default locale.
    ///
    /// Falls back to the locale identifier itself if the table has no
    /// entry (validation warns about this, but lookups never fail).
    pub fn default_tag(&self) -> &str {
        self.hreflang.get(&self.default).map(String::as_str).unwrap_or(&self.default)
    }

    /// Validate the locale set.
    ///
    /// # Checks
    /// - `supported` is non-empty and free of duplicates
    /// - `default` is a member of `supported`
    /// - the hreflang table has an entry for the default locale
    /// - every `root_only` entry is a member of `supported`
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.supported.is_empty() {
            diag.error("locales.supported", "at least one locale is required");
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for locale in &self.supported {
            if !seen.insert(locale.as_str()) {
                diag.error("locales.supported", format!("duplicate locale '{}'", locale));
            }
        }

        if !self.is_supported(&self.default) {
            diag.error_with_hint(
                "locales.default",
                format!("default locale '{}' is not in the supported set", self.default),
                "add it to locales.supported",
            );
        }

        if !self.hreflang.contains_key(&self.default) {
            diag.error_with_hint(
                "locales.hreflang",
                format!("no hreflang tag for default locale '{}'", self.default),
                format!("add an entry like: {} = \"en-US\"", self.default),
            );
        }

        for locale in &self.root_only {
            if !self.is_supported(locale) {
                diag.error(
                    "locales.root_only",
                    format!("locale '{}' is not in the supported set", locale),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_locales_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.locales.default, "en");
        assert_eq!(config.locales.supported, vec!["en"]);
        assert!(config.locales.is_shared_segment("article"));
        assert!(!config.locales.is_shared_segment("pricing"));
        assert!(config.locales.root_only.is_empty());
    }

    #[test]
    fn test_locales_parse() {
        let config = test_parse_config(
            "[locales]\ndefault = \"en\"\nsupported = [\"en\", \"en-GB\", \"en-AU\"]\n\
             [locales.hreflang]\nen = \"en-US\"\nen-GB = \"en-GB\"\nen-AU = \"en-AU\"",
        );

        assert!(config.locales.is_supported("en-GB"));
        assert!(!config.locales.is_supported("fr-FR"));
        assert!(config.locales.is_default("en"));
        assert_eq!(config.locales.default_tag(), "en-US");
    }

    #[test]
    fn test_locales_validate_default_membership() {
        let config = test_parse_config(
            "[locales]\ndefault = \"de\"\nsupported = [\"en\"]\n[locales.hreflang]\nde = \"de-DE\"",
        );

        let mut diag = crate::config::ConfigDiagnostics::new();
        config.locales.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_locales_validate_duplicate() {
        let config =
            test_parse_config("[locales]\nsupported = [\"en\", \"en\"]");

        let mut diag = crate::config::ConfigDiagnostics::new();
        config.locales.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_default_tag_fallback_without_entry() {
        let config = test_parse_config(
            "[locales]\ndefault = \"fr\"\nsupported = [\"fr\"]",
        );
        // No hreflang entry for fr: validation flags it, lookup still works
        assert_eq!(config.locales.default_tag(), "fr");
    }
}
