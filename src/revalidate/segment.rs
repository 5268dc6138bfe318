//! Content-type to URL-segment mapping.

use crate::config::RevalidateConfig;

/// Content types with a known URL segment and pagination shape.
const KNOWN_TYPES: &[&str] = &[
    "article",
    "podcast",
    "webinar",
    "ebook",
    "case-study",
    "press-release",
    "testimonial",
];

/// Map a CMS content type to its URL segment.
///
/// Config overrides win, then the built-in table. Any other type falls
/// back to the raw type name as the segment, so new CMS types get some
/// invalidation coverage without code changes (at the cost of not knowing
/// their real pagination depth).
pub fn segment_for<'a>(revalidate: &'a RevalidateConfig, content_type: &'a str) -> &'a str {
    if let Some(segment) = revalidate.segments.get(content_type) {
        return segment;
    }
    if !is_known_type(content_type) {
        crate::debug!("revalidate"; "no segment mapping for '{}', using raw type name", content_type);
    }
    content_type
}

/// Check whether a content type is in the built-in table.
pub fn is_known_type(content_type: &str) -> bool {
    KNOWN_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RevalidateConfig;

    #[test]
    fn test_known_types_map_to_themselves() {
        let revalidate = RevalidateConfig::default();
        for ty in ["article", "podcast", "webinar", "ebook", "case-study", "press-release", "testimonial"] {
            assert_eq!(segment_for(&revalidate, ty), ty);
            assert!(is_known_type(ty));
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_raw_name() {
        let revalidate = RevalidateConfig::default();
        assert_eq!(segment_for(&revalidate, "whitepaper"), "whitepaper");
        assert!(!is_known_type("whitepaper"));
    }

    #[test]
    fn test_config_override_wins() {
        let mut revalidate = RevalidateConfig::default();
        revalidate.segments.insert("caseStudy".to_string(), "case-study".to_string());
        assert_eq!(segment_for(&revalidate, "caseStudy"), "case-study");
    }
}
