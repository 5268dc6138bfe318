//! Cache revalidation - invalidation path generation and purge execution.
//!
//! # Module Structure
//!
//! - [`segment`]: content-type -> URL segment mapping
//! - [`paths`]: invalidation path fan-out per changed entity
//! - [`purge`]: the single-path invalidation primitive and its execution
//! - [`webhook`]: content-change notification processing

pub mod paths;
pub mod purge;
pub mod segment;
pub mod webhook;

pub use paths::paths_for;
pub use purge::{HttpPurger, LogPurger, PurgeError, PurgeReport, Purger, purge_all, purger_from_config};
pub use segment::segment_for;
pub use webhook::{RequestContext, WebhookPayload, WebhookReply, process};
