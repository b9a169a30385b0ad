//! Axum router wiring.
//!
//! The counter endpoint accepts every method on `gateway.route`; the ops
//! endpoints are fixed paths.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let route = state.cfg().gateway.route.clone();
    Router::new()
        .route(&route, any(transport::http::visit))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
