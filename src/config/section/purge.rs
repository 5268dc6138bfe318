//! `[purge]` section configuration.
//!
//! Settings for the outbound cache-invalidation API. With no endpoint
//! configured, purges are logged instead of sent (dry-run operation).

use serde::{Deserialize, Serialize};

/// Outbound cache-invalidation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PurgeConfig {
    /// Invalidation API endpoint. Each path is POSTed here individually.
    /// Unset: log-only purger.
    pub endpoint: Option<String>,

    /// Bearer token sent with each purge request.
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            timeout_secs: 10,
        }
    }
}

impl PurgeConfig {
    /// Validate purge settings.
    ///
    /// # Checks
    /// - `endpoint`, when set, must be a valid http/https URL
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if let Some(endpoint) = &self.endpoint {
            match url::Url::parse(endpoint) {
                Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
                    diag.error(
                        "purge.endpoint",
                        format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    diag.error_with_hint(
                        "purge.endpoint",
                        format!("invalid URL: {}", e),
                        "use format like https://cache.example.com/invalidate",
                    );
                }
            }
        }

        if self.timeout_secs == 0 {
            diag.error("purge.timeout_secs", "must be at least 1");
        }
    }
}
