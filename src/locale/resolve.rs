//! Locale-aware path resolution.
//!
//! Pure mapping between (locale, logical content path) and normalized
//! site-relative URLs, in both directions.
//!
//! The fallback policy is deliberate: an unknown or stale locale value
//! resolves like the default locale instead of erroring. Callers are never
//! blocked by a mistyped locale; worst case is a default-locale URL.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::LocalesConfig;
use crate::core::SitePath;

/// Locale prefix shape in stored pathnames: `/xx-XX/` or `/xx-XX`.
///
/// Intentionally narrow: the default locale never appears as a prefix (by
/// construction of [`resolve`]), and bare two-letter codes are never
/// prefixed, so only the regional `xx-XX` form is recognized.
static LOCALE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([a-z]{2}-[A-Z]{2})(/|$)").unwrap());

/// Resolve a locale and content path to a normalized site-relative URL.
///
/// - Default locale, or any locale outside the configured set: no prefix.
/// - Other configured locales: `/{locale}/{path}`.
/// - Empty content path: `/` unprefixed, `/{locale}` prefixed.
pub fn resolve(locales: &LocalesConfig, locale: &str, content_path: &str) -> SitePath {
    let path = SitePath::normalize(content_path);

    if locales.is_default(locale) || !locales.is_supported(locale) {
        return path;
    }

    if path.is_root() {
        return SitePath::normalize(locale);
    }
    SitePath::normalize(&format!("{}/{}", locale, path.without_leading_slash()))
}

/// Resolve to an absolute URL under `base_url` (empty base yields the
/// site-relative form).
pub fn resolve_absolute(
    locales: &LocalesConfig,
    base_url: &str,
    locale: &str,
    content_path: &str,
) -> String {
    format!("{}{}", base_url, resolve(locales, locale, content_path))
}

/// Remove a `/xx-XX` locale prefix from a request pathname.
///
/// Paths without such a prefix are returned unchanged (normalized).
pub fn strip_locale_prefix(pathname: &str) -> SitePath {
    match LOCALE_PREFIX.find(pathname) {
        Some(m) => SitePath::normalize(&pathname[m.end()..]),
        None => SitePath::normalize(pathname),
    }
}

/// Extract the `/xx-XX` locale prefix from a request pathname, if present.
pub fn detect_locale_prefix(pathname: &str) -> Option<&str> {
    LOCALE_PREFIX.captures(pathname).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Check whether a base path is available for a locale.
///
/// The root is always available. Locales in the root-only list get nothing
/// else. Otherwise the first path segment must be in the shared-segment
/// allow-list; unrecognized or CMS-only segments are default-locale only.
pub fn is_available_for_locale(locales: &LocalesConfig, base_path: &SitePath, locale: &str) -> bool {
    if base_path.is_root() {
        return true;
    }

    if locales.is_root_only(locale) {
        return false;
    }

    if locales.is_default(locale) {
        return true;
    }

    match base_path.first_segment() {
        Some(segment) => locales.is_shared_segment(segment),
        None => true,
    }
}
