//! Content-change webhook server.
//!
//! Routes:
//! - `POST {revalidate.route}` - content-change notifications
//! - `GET /healthz` - liveness probe
//!
//! Requests are dispatched into a small thread pool so a slow purge
//! fan-out never blocks the health probe; within one webhook request,
//! purges stay sequential.

mod lifecycle;
mod response;

use std::io::Read;
use std::sync::Arc;

use anyhow::Result;
use tiny_http::{Method, Request, Server};

use crate::config::SiteConfig;
use crate::core::SitePath;
use crate::log;
use crate::revalidate::webhook::{self, RequestContext, WebhookReply};
use crate::revalidate::{Purger, purger_from_config};

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
}

/// Bind the HTTP server without starting the request loop.
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    crate::core::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    log!("serve"; "webhook route: POST {}", config.revalidate.route);

    Ok(BoundServer { server })
}

impl BoundServer {
    /// Start the request loop (blocking until shutdown).
    pub fn run(self, config: Arc<SiteConfig>) -> Result<()> {
        let purger: Arc<dyn Purger> = Arc::from(purger_from_config(&config.purge)?);
        run_request_loop(&self.server, config, purger);
        Ok(())
    }
}

/// Run the webhook server until Ctrl+C.
pub fn run(config: Arc<SiteConfig>) -> Result<()> {
    bind_server(&config)?.run(config)
}

fn run_request_loop(server: &Server, config: Arc<SiteConfig>, purger: Arc<dyn Purger>) {
    // Thread pool keeps the health probe responsive while a webhook's
    // purge fan-out is in flight
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let config = Arc::clone(&config);
        let purger = Arc::clone(&purger);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config, purger.as_ref()) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(mut request: Request, config: &SiteConfig, purger: &dyn Purger) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let path = SitePath::from_request(request.url());

    if path == "/healthz" {
        return response::respond_health(request);
    }

    if path == config.revalidate.route.as_str() {
        let reply = webhook_reply(&mut request, config, purger);
        return response::respond_json(request, reply.status, &reply.body);
    }

    response::respond_not_found(request)
}

/// Run the webhook processing chain and map any failure to the 500 shape.
fn webhook_reply(request: &mut Request, config: &SiteConfig, purger: &dyn Purger) -> WebhookReply {
    if *request.method() != Method::Post {
        return webhook::method_not_allowed();
    }

    let ctx = RequestContext {
        user_agent: header_value(request, "user-agent"),
        referer: header_value(request, "referer"),
    };

    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        return webhook::error_reply(&anyhow::Error::new(e).context("failed to read request body"));
    }

    match webhook::process(config, purger, &ctx, &body) {
        Ok(reply) => reply,
        Err(e) => {
            log!("error"; "revalidation failed: {e:#}");
            webhook::error_reply(&e)
        }
    }
}

/// Extract a header value from the request.
fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
        .map(|h| h.value.to_string())
}
