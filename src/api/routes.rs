//! API route definitions
//!
//! - /get_volume/:column_inner_diameter/:column_shoe_depth - demo volume formula
//! - /api/v1/report - full circulation report
//! - /health - liveness
//! - /docs - endpoint reference

use axum::{routing::get, Router};

use super::handlers::{self, ApiState};

/// Versioned JSON API
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/report", get(handlers::get_report))
        .with_state(state)
}

/// Root-level endpoints
pub fn root_routes(state: ApiState) -> Router {
    Router::new()
        .route(
            "/get_volume/:column_inner_diameter/:column_shoe_depth",
            get(handlers::get_volume),
        )
        .route("/health", get(handlers::health_check))
        .route("/docs", get(handlers::get_docs))
        .with_state(state)
}
