// API module entry
// Routes incoming requests to the classification endpoint.

mod handlers;
pub mod query;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling
///
/// Dispatches to handler functions based on request path and method.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    if state.config.logging.access_log {
        logger::log_request(&method, &uri, req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // Reject oversized declared bodies before any dispatch.
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    match (method, uri.path()) {
        (Method::GET, "/api/classify-number") => {
            handlers::handle_classify(uri.query(), &state).await
        }
        (Method::GET, "/healthz" | "/readyz") => Ok(http::build_health_response("ok")),
        (Method::OPTIONS, _) => Ok(http::build_options_response(state.config.http.enable_cors)),
        (Method::GET, path) => {
            logger::log_api_request("GET", path, 404);
            Ok(response::not_found())
        }
        (method, path) => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            Ok(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
