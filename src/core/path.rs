//! Site-relative path type with waypost's normal form.
//!
//! Invariants:
//! - Always starts with `/`
//! - No repeated slashes
//! - No trailing slash, except the root path `/` itself
//!
//! Malformed input never errors: anything that normalizes to nothing
//! becomes the root path.

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Normalized site-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SitePath(Arc<str>);

impl SitePath {
    /// The root path `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Normalize an arbitrary path string into canonical form.
    ///
    /// Collapses repeated slashes, adds the leading slash, strips the
    /// trailing slash. Empty input maps to `/`.
    pub fn normalize(raw: &str) -> Self {
        let segments: Vec<&str> = raw.trim().split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Self::root();
        }
        Self(Arc::from(format!("/{}", segments.join("/"))))
    }

    /// Create from a browser/request URL: decode percent-encoding and strip
    /// the query string before normalizing.
    pub fn from_request(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::normalize(&decoded)
    }

    /// Get the normalized path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// First path segment, if any.
    ///
    /// `/article/my-post` -> `article`, `/` -> `None`
    pub fn first_segment(&self) -> Option<&str> {
        self.0.trim_start_matches('/').split('/').next().filter(|s| !s.is_empty())
    }

    /// Path without its leading slash. Root yields the empty string.
    pub fn without_leading_slash(&self) -> &str {
        self.0.trim_start_matches('/')
    }
}

impl std::fmt::Display for SitePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for SitePath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for SitePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SitePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SitePath {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl PartialEq<str> for SitePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for SitePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for SitePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SitePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::normalize(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(SitePath::normalize(""), "/");
        assert_eq!(SitePath::normalize("/"), "/");
        assert_eq!(SitePath::normalize("///"), "/");
    }

    #[test]
    fn test_normalize_repeated_slashes() {
        assert_eq!(SitePath::normalize("//a//b/"), "/a/b");
        assert_eq!(SitePath::normalize("a///b"), "/a/b");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(SitePath::normalize("article/foo"), "/article/foo");
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(SitePath::normalize("/article/foo/"), "/article/foo");
        assert_eq!(SitePath::normalize("/article/"), "/article");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["", "//a//b/", "article/foo", "/x/y/z///"] {
            let once = SitePath::normalize(raw);
            let twice = SitePath::normalize(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_from_request_strips_query() {
        assert_eq!(SitePath::from_request("/article/foo?lang=en-GB"), "/article/foo");
        assert_eq!(SitePath::from_request("/article/foo#section"), "/article/foo");
    }

    #[test]
    fn test_from_request_decodes() {
        assert_eq!(SitePath::from_request("/article/hello%20world"), "/article/hello world");
    }

    #[test]
    fn test_first_segment() {
        assert_eq!(SitePath::normalize("/article/my-post").first_segment(), Some("article"));
        assert_eq!(SitePath::normalize("/browse").first_segment(), Some("browse"));
        assert_eq!(SitePath::root().first_segment(), None);
    }

    #[test]
    fn test_is_root() {
        assert!(SitePath::normalize("").is_root());
        assert!(!SitePath::normalize("/article").is_root());
    }

    #[test]
    fn test_without_leading_slash() {
        assert_eq!(SitePath::normalize("/article/foo").without_leading_slash(), "article/foo");
        assert_eq!(SitePath::root().without_leading_slash(), "");
    }

    #[test]
    fn test_hash_dedup() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(SitePath::normalize("/article/foo"));
        set.insert(SitePath::normalize("article/foo/"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize_deserialize() {
        let path = SitePath::normalize("/article/foo");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#""/article/foo""#);

        let parsed: SitePath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, path);
    }
}
