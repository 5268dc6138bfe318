//! Alternate-locale link computation for hreflang metadata.
//!
//! For a current pathname, produces one `{href, hreflang}` pair per locale
//! that serves the underlying base path, plus the `x-default` URL. The
//! `x-default` entry always resolves to the default-locale URL, even when
//! the base path itself is restricted for the default locale.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::locale::hreflang::{X_DEFAULT, format_hreflang};
use crate::locale::resolve::{
    detect_locale_prefix, is_available_for_locale, resolve_absolute, strip_locale_prefix,
};

/// Navigation state the computation runs against.
///
/// Recomputed per navigation event. While the navigation target is not yet
/// finalized the computation is a no-op: producing no output is correct,
/// producing links for the wrong path is not.
#[derive(Debug, Clone)]
pub enum Navigation {
    /// Navigation target not yet known.
    Pending,
    /// Navigation settled on a pathname, optionally with an explicit
    /// locale query parameter.
    Ready {
        pathname: String,
        query_locale: Option<String>,
    },
}

/// A single alternate link: absolute href plus its hreflang tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub href: String,
    pub hreflang: String,
}

/// Alternate links for one resolved navigation.
#[derive(Debug, Clone, Serialize)]
pub struct AlternateLinks {
    /// The acting locale of the current navigation.
    pub locale: String,
    /// One entry per locale serving the base path.
    pub alternates: Vec<AlternateLink>,
    /// Default-locale URL, always populated (backs the x-default entry).
    pub default_url: String,
}

impl AlternateLinks {
    /// Entries ready for `<link rel="alternate">` rendering: the per-locale
    /// links followed by exactly one `x-default` entry.
    pub fn entries(&self) -> Vec<AlternateLink> {
        let mut entries = self.alternates.clone();
        entries.push(AlternateLink {
            href: self.default_url.clone(),
            hreflang: X_DEFAULT.to_string(),
        });
        entries
    }
}

/// Compute the alternate link set for a navigation state.
///
/// Returns `None` while the navigation is pending.
pub fn compute_alternates(config: &SiteConfig, nav: &Navigation) -> Option<AlternateLinks> {
    let Navigation::Ready { pathname, query_locale } = nav else {
        return None;
    };

    let locales = &config.locales;
    let base_url = config.site.base_url();

    // Acting locale: explicit query param wins if configured, else the
    // pathname prefix, else the default.
    let locale = match query_locale.as_deref() {
        Some(l) if locales.is_supported(l) => l.to_string(),
        _ => detect_locale_prefix(pathname)
            .map(ToString::to_string)
            .unwrap_or_else(|| locales.default.clone()),
    };

    let base_path = strip_locale_prefix(pathname);

    let alternates = locales
        .supported
        .iter()
        .filter(|l| is_available_for_locale(locales, &base_path, l))
        .map(|l| AlternateLink {
            href: resolve_absolute(locales, base_url, l, base_path.without_leading_slash()),
            hreflang: format_hreflang(locales, l).to_string(),
        })
        .collect();

    // x-default must always resolve, availability notwithstanding
    let default_url =
        resolve_absolute(locales, base_url, &locales.default, base_path.without_leading_slash());

    Some(AlternateLinks { locale, alternates, default_url })
}
