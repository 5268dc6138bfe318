//! Invalidation path generation.
//!
//! For a changed content entity, computes the exhaustive, deduplicated set
//! of cached paths to purge: the detail page, its listing and early
//! pagination pages, the site root, and the cross-cutting hub listings -
//! each in every locale prefix form.
//!
//! The fan-out is bounded, not exhaustive: only listing pages up to the
//! configured pagination depth are purged. Deeper pages go stale until
//! their own TTL or an explicit rebuild, trading completeness for
//! invalidation-request volume.

use rustc_hash::FxHashSet;

use crate::config::SiteConfig;
use crate::core::SitePath;
use crate::locale::resolve;
use crate::revalidate::segment::segment_for;

/// Order-preserving set of paths (first-seen order, no duplicates).
#[derive(Debug, Default)]
struct PathSet {
    paths: Vec<SitePath>,
    seen: FxHashSet<SitePath>,
}

impl PathSet {
    fn push(&mut self, path: SitePath) {
        if self.seen.insert(path.clone()) {
            self.paths.push(path);
        }
    }

    fn into_vec(self) -> Vec<SitePath> {
        self.paths
    }
}

/// Compute every cached path invalidated by a change to
/// `{content_type, slug}`.
pub fn paths_for(config: &SiteConfig, content_type: &str, slug: &str) -> Vec<SitePath> {
    let locales = &config.locales;
    let segment = segment_for(&config.revalidate, content_type);
    let mut set = PathSet::default();

    // Detail page, every locale prefix form
    for locale in &locales.supported {
        set.push(resolve(locales, locale, &format!("{}/{}", segment, slug)));
    }

    // Listing and early pagination pages
    push_listing(&mut set, config, segment);

    // Any content change can change what the root and hub pages display
    for locale in &locales.supported {
        set.push(resolve(locales, locale, ""));
    }
    for hub in &config.revalidate.hub_segments {
        push_listing(&mut set, config, hub);
    }

    set.into_vec()
}

/// Emit a segment's listing page and pagination pages 2..=depth for every
/// locale.
fn push_listing(set: &mut PathSet, config: &SiteConfig, segment: &str) {
    let locales = &config.locales;
    for locale in &locales.supported {
        set.push(resolve(locales, locale, segment));
        for page in 2..=config.revalidate.pagination_depth {
            set.push(resolve(locales, locale, &format!("{}/page/{}", segment, page)));
        }
    }
}
