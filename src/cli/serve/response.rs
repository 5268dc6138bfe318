//! HTTP response helpers.

use anyhow::Result;
use serde_json::{Value, json};
use tiny_http::{Header, Request, Response, StatusCode};

const JSON: &str = "application/json";

/// Respond with a JSON body.
pub fn respond_json(request: Request, status: u16, body: &Value) -> Result<()> {
    let response = Response::from_data(serde_json::to_vec(body)?)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", JSON));
    request.respond(response)?;
    Ok(())
}

/// Respond with 404 for an unrecognized route.
pub fn respond_not_found(request: Request) -> Result<()> {
    respond_json(request, 404, &json!({ "message": "Not found" }))
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    respond_json(request, 503, &json!({ "message": "Service unavailable" }))
}

/// Respond with the liveness probe body.
pub fn respond_health(request: Request) -> Result<()> {
    respond_json(
        request,
        200,
        &json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }),
    )
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
