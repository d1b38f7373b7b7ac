//! API route handlers
//!
//! - Column volume from path parameters (demo endpoint)
//! - Circulation report for the loaded well plan
//! - Health check and a static documentation page

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::config::WellPlan;
use crate::hydraulics;
use crate::report::CirculationReport;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Well plan loaded at startup
    pub plan: Arc<WellPlan>,
}

impl ApiState {
    pub fn new(plan: WellPlan) -> Self {
        Self {
            plan: Arc::new(plan),
        }
    }
}

// ============================================================================
// Column Volume
// ============================================================================

/// GET /get_volume/{column_inner_diameter}/{column_shoe_depth}
///
/// Returns `0.785 × D² × L` as a bare JSON number. Path segments that are
/// not numbers, negative values and volumes that overflow are rejected with 422.
pub async fn get_volume(params: Result<Path<(f64, f64)>, PathRejection>) -> Response {
    let Path((inner_diameter, shoe_depth)) = match params {
        Ok(p) => p,
        Err(rejection) => return ApiErrorResponse::unprocessable(rejection.body_text()),
    };

    match hydraulics::cylinder_volume(inner_diameter, shoe_depth) {
        Ok(volume) => {
            debug!(inner_diameter, shoe_depth, volume, "Column volume computed");
            Json(volume).into_response()
        }
        Err(e) => ApiErrorResponse::unprocessable(e.to_string()),
    }
}

// ============================================================================
// Report
// ============================================================================

/// GET /api/v1/report - every worksheet result for the loaded plan
pub async fn get_report(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(CirculationReport::compute(&state.plan))
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub well: String,
}

/// GET /health
pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        well: state.plan.well.name.clone(),
    })
}

// ============================================================================
// Docs
// ============================================================================

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>mudcalc API</title></head>
<body>
<h1>mudcalc API</h1>
<h2>GET /get_volume/{column_inner_diameter}/{column_shoe_depth}</h2>
<p>Internal volume of a casing column, m&sup3;: <code>0.785 &times; D&sup2; &times; L</code>.
Diameter in metres, shoe depth in metres. Returns a bare JSON number.
Non-numeric parameters are rejected with HTTP 422.</p>
<p>Example: <code>/get_volume/0.13/2283</code> &rarr; <code>30.2874195</code></p>
<h2>GET /api/v1/report</h2>
<p>Every circulation, weighting and density result for the server's well plan,
wrapped as <code>{ "data": ..., "meta": ... }</code>.</p>
<h2>GET /health</h2>
<p>Liveness check.</p>
</body>
</html>
"#;

/// GET /docs - static endpoint reference
pub async fn get_docs() -> Html<&'static str> {
    Html(DOCS_HTML)
}

/// Fallback for unknown paths
pub async fn not_found() -> Response {
    ApiErrorResponse::not_found("No such endpoint, see /docs")
}
