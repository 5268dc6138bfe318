//! Cache purge execution.
//!
//! The external invalidation API is a single-path primitive behind the
//! [`Purger`] trait. Paths are purged independently and sequentially so
//! per-path success/failure logging stays deterministic and ordered;
//! nothing about correctness depends on the sequencing.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config::PurgeConfig;
use crate::core::SitePath;
use crate::{debug, log};

/// Purge failure for a single path.
#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("purge endpoint returned HTTP {0}")]
    Status(u16),

    #[error("purge request failed")]
    Transport(#[from] reqwest::Error),
}

/// Single-path cache invalidation primitive.
pub trait Purger: Send + Sync {
    /// Invalidate the cached render of one site path.
    fn purge(&self, path: &str) -> Result<(), PurgeError>;
}

// ============================================================================
// Implementations
// ============================================================================

/// Purger that POSTs each path to the configured invalidation endpoint.
pub struct HttpPurger {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpPurger {
    pub fn new(
        endpoint: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PurgeError> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint, token })
    }
}

impl Purger for HttpPurger {
    fn purge(&self, path: &str) -> Result<(), PurgeError> {
        let mut request =
            self.client.post(&self.endpoint).json(&serde_json::json!({ "path": path }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(PurgeError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

/// Purger that records the path in the log and succeeds. Used when no
/// endpoint is configured (local / dry-run operation).
pub struct LogPurger;

impl Purger for LogPurger {
    fn purge(&self, path: &str) -> Result<(), PurgeError> {
        log!("purge"; "dry-run {}", path);
        Ok(())
    }
}

/// Build the purger the configuration calls for.
pub fn purger_from_config(purge: &PurgeConfig) -> anyhow::Result<Box<dyn Purger>> {
    match &purge.endpoint {
        Some(endpoint) => Ok(Box::new(HttpPurger::new(
            endpoint.clone(),
            purge.token.clone(),
            Duration::from_secs(purge.timeout_secs),
        )?)),
        None => {
            log!("purge"; "no endpoint configured, purges are log-only");
            Ok(Box::new(LogPurger))
        }
    }
}

// ============================================================================
// Execution
// ============================================================================

/// Outcome of purging a path set.
#[derive(Debug, Default, Serialize)]
pub struct PurgeReport {
    /// Paths whose invalidation succeeded, in purge order.
    pub revalidated: Vec<String>,
    /// Paths whose invalidation failed, in purge order.
    pub failed: Vec<String>,
}

impl PurgeReport {
    /// True only if zero failures occurred.
    pub fn success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.revalidated.len() + self.failed.len()
    }
}

/// Purge each path independently, in order.
///
/// A failed path is logged and recorded but never aborts the remainder
/// (at-least-effort-once: invalidation is idempotent and repeatable).
pub fn purge_all(purger: &dyn Purger, paths: &[SitePath]) -> PurgeReport {
    let mut report = PurgeReport::default();
    for path in paths {
        match purger.purge(path.as_str()) {
            Ok(()) => {
                debug!("purge"; "ok {}", path);
                report.revalidated.push(path.to_string());
            }
            Err(e) => {
                log!("purge"; "failed {}: {}", path, e);
                report.failed.push(path.to_string());
            }
        }
    }
    report
}

// ============================================================================
// Test support
// ============================================================================

/// Purger that records every purged path; paths in `fail` report failure.
#[cfg(test)]
pub struct RecordingPurger {
    pub purged: std::sync::Mutex<Vec<String>>,
    pub fail: Vec<String>,
}

#[cfg(test)]
impl RecordingPurger {
    pub fn new() -> Self {
        Self { purged: std::sync::Mutex::new(Vec::new()), fail: Vec::new() }
    }

    pub fn failing(paths: &[&str]) -> Self {
        Self {
            purged: std::sync::Mutex::new(Vec::new()),
            fail: paths.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
impl Purger for RecordingPurger {
    fn purge(&self, path: &str) -> Result<(), PurgeError> {
        self.purged.lock().unwrap().push(path.to_string());
        if self.fail.iter().any(|f| f == path) {
            return Err(PurgeError::Status(500));
        }
        Ok(())
    }
}
