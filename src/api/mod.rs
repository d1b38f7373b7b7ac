//! REST API module using Axum
//!
//! A thin HTTP shell over the hydraulics formulas:
//! - `GET /get_volume/{d}/{l}` demo endpoint returning a bare number
//! - `/api/v1/report` with the response envelope
//! - `/health` and `/docs`

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ApiState;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the complete application router.
pub fn create_app(state: ApiState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes(state.clone()))
        .merge(routes::root_routes(state))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
}
