//! Content-change webhook processing.
//!
//! Transport-independent: parses the notification body, applies the
//! publish/preview gating, drives the purger, and builds the reply. The
//! HTTP glue lives in the serve command.
//!
//! Gating order matters: a preview-context event is ignored regardless of
//! its publish timestamp, so production cache is never purged for content
//! nobody can see yet.

use serde::Deserialize;
use serde_json::{Value, json};

use anyhow::Context;

use crate::config::SiteConfig;
use crate::log;
use crate::revalidate::purge::{Purger, purge_all};
use crate::revalidate::paths_for;

// ============================================================================
// Payload
// ============================================================================

/// Webhook payload fields consumed from the content store.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    /// Entity kind (`post`, `topic`, `author`, ...).
    #[serde(rename = "_type")]
    pub entity: String,

    /// Sub-kind for generic `post` entities (`article`, `podcast`, ...).
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,

    pub slug: Option<SlugField>,

    pub language: Option<String>,

    /// Publish timestamp. Absent for drafts; only publish transitions
    /// trigger invalidation.
    #[serde(rename = "_publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SlugField {
    pub current: String,
}

impl WebhookPayload {
    /// Content type driving path generation: generic `post` entities carry
    /// their sub-kind in `contentType`, any other entity kind is its own
    /// content type.
    pub fn effective_type(&self) -> &str {
        if self.entity == "post" {
            self.content_type.as_deref().unwrap_or(&self.entity)
        } else {
            &self.entity
        }
    }

    /// Slug, empty when absent. An empty slug degrades gracefully: the
    /// "detail" path normalizes down to the listing page.
    pub fn slug(&self) -> &str {
        self.slug.as_ref().map(|s| s.current.as_str()).unwrap_or_default()
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// Request context
// ============================================================================

/// Inbound request headers relevant to preview detection.
#[derive(Debug, Default, Clone)]
pub struct RequestContext {
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl RequestContext {
    /// Heuristic preview/draft detection: case-insensitive substring match
    /// on `user-agent` and `referer`. Fragile, but the only signal the
    /// content store actually sends.
    pub fn is_preview(&self, markers: &[String]) -> bool {
        let haystacks: Vec<String> = [self.user_agent.as_deref(), self.referer.as_deref()]
            .into_iter()
            .flatten()
            .map(str::to_ascii_lowercase)
            .collect();

        markers
            .iter()
            .map(|m| m.to_ascii_lowercase())
            .any(|marker| haystacks.iter().any(|h| h.contains(&marker)))
    }
}

// ============================================================================
// Processing
// ============================================================================

/// HTTP-agnostic webhook reply.
#[derive(Debug)]
pub struct WebhookReply {
    pub status: u16,
    pub body: Value,
}

/// Process one content-change notification.
///
/// Returns `Err` only for unexpected failures (e.g. an unparseable body);
/// the caller maps those to the 500 reply shape. Partial purge failure is
/// not an error: it is reported in the 200 body with `success: false`.
pub fn process(
    config: &SiteConfig,
    purger: &dyn Purger,
    ctx: &RequestContext,
    body: &str,
) -> anyhow::Result<WebhookReply> {
    let payload: WebhookPayload =
        serde_json::from_str(body).context("invalid webhook payload")?;

    if ctx.is_preview(&config.revalidate.preview_markers) {
        log!("revalidate"; "preview event for '{}', skipping", payload.effective_type());
        return Ok(WebhookReply {
            status: 200,
            body: json!({ "message": "Draft mode, skipping revalidation" }),
        });
    }

    if payload.published_at.is_none() {
        return Ok(WebhookReply {
            status: 200,
            body: json!({ "message": "Content not published" }),
        });
    }

    let content_type = payload.effective_type();
    let slug = payload.slug();

    let paths = paths_for(config, content_type, slug);
    log!("revalidate"; "{} '{}' changed, purging {} path(s)", content_type, slug, paths.len());

    let report = purge_all(purger, &paths);
    if !report.success() {
        log!("revalidate"; "{} of {} path(s) failed", report.failed.len(), report.total());
    }

    Ok(WebhookReply {
        status: 200,
        body: json!({
            "message": "Revalidation complete",
            "type": content_type,
            "slug": slug,
            "language": payload.language(),
            "totalPaths": report.total(),
            "revalidatedPaths": report.revalidated,
            "failedPaths": report.failed,
            "success": report.success(),
        }),
    })
}

/// Reply shape for an unhandled processing error.
pub fn error_reply(error: &anyhow::Error) -> WebhookReply {
    WebhookReply {
        status: 500,
        body: json!({ "message": "Revalidation failed", "error": format!("{error:#}") }),
    }
}

/// Reply for a non-POST request on the webhook route.
pub fn method_not_allowed() -> WebhookReply {
    WebhookReply { status: 405, body: json!({ "message": "Method not allowed" }) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_three_locales;
    use crate::revalidate::purge::RecordingPurger;

    const PUBLISHED_PODCAST: &str = r#"{
        "_type": "post",
        "contentType": "podcast",
        "slug": { "current": "ep1" },
        "language": "en",
        "_publishedAt": "2024-01-01"
    }"#;

    #[test]
    fn test_published_post_purges_and_reports() {
        let config = test_config_three_locales();
        let purger = RecordingPurger::new();
        let ctx = RequestContext::default();

        let reply = process(&config, &purger, &ctx, PUBLISHED_PODCAST).unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["type"], "podcast");
        assert_eq!(reply.body["slug"], "ep1");
        assert_eq!(reply.body["language"], "en");
        assert_eq!(reply.body["success"], true);
        assert_eq!(reply.body["failedPaths"].as_array().unwrap().len(), 0);

        let revalidated: Vec<&str> = reply.body["revalidatedPaths"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(revalidated.contains(&"/podcast/ep1"));
        assert!(revalidated.contains(&"/en-GB/podcast/ep1"));
        assert!(revalidated.contains(&"/podcast/page/2"));
        assert_eq!(
            reply.body["totalPaths"].as_u64().unwrap() as usize,
            revalidated.len()
        );
    }

    #[test]
    fn test_unpublished_content_is_benign_noop() {
        let config = test_config_three_locales();
        let purger = RecordingPurger::new();
        let ctx = RequestContext::default();

        let body = r#"{
            "_type": "post",
            "contentType": "podcast",
            "slug": { "current": "ep1" },
            "language": "en"
        }"#;
        let reply = process(&config, &purger, &ctx, body).unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["message"], "Content not published");
        assert!(purger.purged.lock().unwrap().is_empty());
    }

    #[test]
    fn test_preview_user_agent_skips_regardless_of_publish() {
        let config = test_config_three_locales();
        let purger = RecordingPurger::new();
        let ctx = RequestContext {
            user_agent: Some("Sanity.io webhook delivery".to_string()),
            referer: None,
        };

        let reply = process(&config, &purger, &ctx, PUBLISHED_PODCAST).unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["message"], "Draft mode, skipping revalidation");
        assert!(purger.purged.lock().unwrap().is_empty());
    }

    #[test]
    fn test_preview_referer_also_detected() {
        let config = test_config_three_locales();
        let ctx = RequestContext {
            user_agent: None,
            referer: Some("https://studio.sanity.work/preview".to_string()),
        };
        assert!(ctx.is_preview(&config.revalidate.preview_markers));
    }

    #[test]
    fn test_partial_failure_reported_not_escalated() {
        let config = test_config_three_locales();
        let purger = RecordingPurger::failing(&["/podcast", "/en-GB/podcast"]);
        let ctx = RequestContext::default();

        let reply = process(&config, &purger, &ctx, PUBLISHED_PODCAST).unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["success"], false);
        let failed: Vec<&str> = reply.body["failedPaths"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(failed, vec!["/podcast", "/en-GB/podcast"]);
    }

    #[test]
    fn test_non_post_entity_uses_own_type() {
        let config = test_config_three_locales();
        let purger = RecordingPurger::new();
        let ctx = RequestContext::default();

        let body = r#"{
            "_type": "topic",
            "slug": { "current": "observability" },
            "language": "en",
            "_publishedAt": "2024-01-01"
        }"#;
        let reply = process(&config, &purger, &ctx, body).unwrap();

        assert_eq!(reply.body["type"], "topic");
        let revalidated: Vec<&str> = reply.body["revalidatedPaths"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(revalidated.contains(&"/topic/observability"));
    }

    #[test]
    fn test_unparseable_body_is_an_error() {
        let config = test_config_three_locales();
        let purger = RecordingPurger::new();
        let ctx = RequestContext::default();

        let err = process(&config, &purger, &ctx, "not json").unwrap_err();
        let reply = error_reply(&err);
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body["message"], "Revalidation failed");
        assert!(reply.body["error"].as_str().unwrap().contains("invalid webhook payload"));
    }

    #[test]
    fn test_method_not_allowed_shape() {
        let reply = method_not_allowed();
        assert_eq!(reply.status, 405);
        assert_eq!(reply.body["message"], "Method not allowed");
    }

    #[test]
    fn test_marker_matching_is_case_insensitive() {
        let ctx = RequestContext {
            user_agent: Some("SANITY webhook".to_string()),
            referer: None,
        };
        assert!(ctx.is_preview(&["sanity".to_string()]));
        assert!(!ctx.is_preview(&["contentful".to_string()]));
    }
}
