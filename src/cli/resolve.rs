//! `resolve` and `alternates` commands - URL inspection tooling.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::locale::{Navigation, compute_alternates, resolve, resolve_absolute};

/// Print the resolved URL for a locale and content path.
pub fn run_resolve(config: &SiteConfig, locale: &str, path: &str, absolute: bool) -> Result<()> {
    if absolute {
        println!("{}", resolve_absolute(&config.locales, config.site.base_url(), locale, path));
    } else {
        println!("{}", resolve(&config.locales, locale, path));
    }
    Ok(())
}

/// Print the alternate link set for a pathname.
pub fn run_alternates(
    config: &SiteConfig,
    pathname: &str,
    locale: Option<&str>,
    json: bool,
) -> Result<()> {
    let nav = Navigation::Ready {
        pathname: pathname.to_string(),
        query_locale: locale.map(ToString::to_string),
    };

    // A CLI invocation is always a settled navigation
    let Some(links) = compute_alternates(config, &nav) else {
        unreachable!("ready navigation always yields alternates");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    for entry in links.entries() {
        println!("{:<12} {}", entry.hreflang, entry.href);
    }
    Ok(())
}
