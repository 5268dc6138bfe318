//! `paths` command - invalidation fan-out inspection and manual purging.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;
use crate::revalidate::{paths_for, purge_all, purger_from_config};

/// Print the invalidation path set for a content change; with `purge`,
/// drive the configured purger and report per-path results.
pub fn run(config: &SiteConfig, content_type: &str, slug: &str, purge: bool) -> Result<()> {
    let paths = paths_for(config, content_type, slug);

    if !purge {
        for path in &paths {
            println!("{path}");
        }
        return Ok(());
    }

    let purger = purger_from_config(&config.purge)?;
    let report = purge_all(purger.as_ref(), &paths);

    log!(
        "revalidate";
        "{} of {} path(s) purged{}",
        report.revalidated.len(),
        report.total(),
        if report.success() { "" } else { " (with failures)" }
    );
    for failed in &report.failed {
        log!("error"; "failed: {}", failed);
    }
    Ok(())
}
