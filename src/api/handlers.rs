// Classification endpoint handlers

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use super::query;
use super::response;
use super::types::ClassificationResult;
use crate::config::AppState;
use crate::logger;

/// Handle `GET /api/classify-number`
///
/// Single pass: validate the `number` parameter, resolve the fun fact,
/// classify, respond. Validation failures answer 400 with the error tag;
/// everything else answers 200.
pub async fn handle_classify(
    raw_query: Option<&str>,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let number = match query::parse_number_param(raw_query) {
        Ok(n) => n,
        Err(err) => {
            logger::log_api_request("GET", "/api/classify-number", 400);
            return response::json_response(StatusCode::BAD_REQUEST, &err.body());
        }
    };

    let fun_fact = state.facts.fun_fact(number).await;
    let result = ClassificationResult::new(number, fun_fact);

    logger::log_api_request("GET", "/api/classify-number", 200);
    response::json_response(StatusCode::OK, &result)
}
