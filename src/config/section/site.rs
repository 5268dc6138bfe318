//! `[site]` section configuration.
//!
//! Base site identity: the public domain under which absolute URLs are
//! built for hreflang alternate links.

use serde::{Deserialize, Serialize};

/// Site identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Base public URL (e.g. "https://example.com"). Used for absolute
    /// hreflang hrefs; unset means site-relative hrefs.
    pub url: Option<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
        }
    }
}

impl SiteSectionConfig {
    /// Base URL with any trailing slash removed, empty if unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url`, when set, must be a valid http/https URL with a host
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            diag.hint("site.url", "not set; alternate links will be site-relative");
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        "site.url",
                        format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        "site.url",
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    "site.url",
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert!(config.site.url.is_none());
        assert_eq!(config.site.base_url(), "");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = test_parse_config("[site]\nurl = \"https://example.com/\"");
        assert_eq!(config.site.base_url(), "https://example.com");
    }
}
