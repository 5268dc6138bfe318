//! `[revalidate]` section configuration.
//!
//! Controls the webhook route and how far the invalidation fan-out
//! reaches: pagination depth, hub listings, and preview detection.
//!
//! # Example
//!
//! ```toml
//! [revalidate]
//! route = "/api/revalidate"
//! pagination_depth = 3          # listing pages 2..=3 are purged
//! hub_segments = ["browse", "topic"]
//! preview_markers = ["sanity"]
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Revalidation webhook and fan-out settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevalidateConfig {
    /// URL path of the inbound webhook.
    pub route: String,

    /// Deepest listing page purged alongside a change (pages 2..=depth).
    /// Deeper pagination is accepted to go stale until its own TTL.
    pub pagination_depth: u32,

    /// Cross-cutting hub listings purged on every content change.
    pub hub_segments: Vec<String>,

    /// Substrings of `user-agent`/`referer` that mark a CMS preview
    /// context. Preview events never purge production cache.
    pub preview_markers: Vec<String>,

    /// Content-type -> URL segment overrides. Types absent here use the
    /// built-in table, then fall back to the raw type name.
    pub segments: FxHashMap<String, String>,
}

impl Default for RevalidateConfig {
    fn default() -> Self {
        Self {
            route: "/api/revalidate".to_string(),
            pagination_depth: 3,
            hub_segments: vec!["browse".to_string(), "topic".to_string()],
            preview_markers: vec!["sanity".to_string()],
            segments: FxHashMap::default(),
        }
    }
}

impl RevalidateConfig {
    /// Validate revalidation settings.
    ///
    /// # Checks
    /// - `pagination_depth` >= 1 (depth 1 means first pages only)
    /// - `route` starts with `/`
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.pagination_depth < 1 {
            diag.error_with_hint(
                "revalidate.pagination_depth",
                "must be at least 1",
                "use 1 to purge only first listing pages",
            );
        }

        if !self.route.starts_with('/') {
            diag.error_with_hint(
                "revalidate.route",
                format!("'{}' must start with '/'", self.route),
                "e.g. /api/revalidate",
            );
        }
    }
}
