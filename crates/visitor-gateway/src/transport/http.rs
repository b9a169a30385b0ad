//! Counter endpoint handler.
//!
//! Branches only on preflight vs. everything else:
//! - `OPTIONS` -> 204, CORS headers, store untouched
//! - anything else -> one increment, JSON body (`count` or `error`)
//!
//! With `counter.methods: post`, non-POST requests get 405 instead.

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use visitor_core::error::VisitorError;
use visitor_core::protocol::CounterResponse;

use crate::app_state::AppState;
use crate::config::MethodMode;
use crate::transport::cors;

pub async fn visit(State(app): State<AppState>, method: Method) -> Response {
    if method == Method::OPTIONS {
        record(&app, "preflight");
        return preflight();
    }

    if app.cfg().counter.methods == MethodMode::Post && method != Method::POST {
        let err = VisitorError::MethodNotAllowed;
        record_error(&app, &err);
        let mut resp = error_response(&err);
        resp.headers_mut().insert(header::ALLOW, HeaderValue::from_static("POST, OPTIONS"));
        return resp;
    }

    match app.counter().increment().await {
        Ok(count) => {
            record(&app, "ok");
            json_response(StatusCode::OK, CounterResponse::count(count))
        }
        Err(e) => {
            record_error(&app, &e);
            error_response(&e)
        }
    }
}

fn preflight() -> Response {
    let mut resp = StatusCode::NO_CONTENT.into_response();
    cors::apply(resp.headers_mut());
    resp
}

fn json_response(status: StatusCode, body: CounterResponse) -> Response {
    let mut resp = (status, Json(body)).into_response();
    cors::apply(resp.headers_mut());
    resp
}

fn status_for(err: &VisitorError) -> StatusCode {
    match err {
        VisitorError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(err: &VisitorError) -> Response {
    json_response(status_for(err), CounterResponse::error(err.public_message()))
}

fn record(app: &AppState, outcome: &str) {
    app.metrics().requests.inc(&[("outcome", outcome)]);
}

fn record_error(app: &AppState, err: &VisitorError) {
    let outcome = err.client_code().as_str().to_ascii_lowercase();
    record(app, &outcome);
}
