//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! every endpoint using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port.

use mudcalc::api::{create_app, ApiState};
use mudcalc::WellPlan;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn create_test_state() -> ApiState {
    ApiState::new(WellPlan::default())
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let app = create_app(create_test_state());
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_get_volume_returns_bare_number() {
    let (status, body) = get("/get_volume/0.13/2283").await;
    assert_eq!(status, StatusCode::OK);

    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let volume = v.as_f64().expect("body should be a bare JSON number");
    let expected = 0.785 * 0.13_f64.powi(2) * 2283.0;
    assert!((volume - expected).abs() < 1e-9, "{volume} != {expected}");
    assert!((volume - 30.287).abs() < 1e-3);
}

#[tokio::test]
async fn test_get_volume_accepts_integer_segments() {
    let (status, body) = get("/get_volume/1/10").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!((v.as_f64().unwrap() - 7.85).abs() < 1e-12);
}

#[tokio::test]
async fn test_get_volume_non_numeric_is_422() {
    let (status, body) = get("/get_volume/abc/2283").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"]["code"], "UNPROCESSABLE_ENTITY");
    assert!(v["error"]["message"].is_string());
}

#[tokio::test]
async fn test_get_volume_negative_depth_is_422() {
    let (status, _) = get("/get_volume/0.13/-5").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_volume_nan_is_422() {
    let (status, _) = get("/get_volume/NaN/10").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_volume_overflow_is_422_not_null() {
    let (status, body) = get("/get_volume/1e200/1e200").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"]["code"], "UNPROCESSABLE_ENTITY");
    assert!(v["error"]["message"]
        .as_str()
        .unwrap()
        .contains("cylinder volume"));
}

#[tokio::test]
async fn test_get_volume_missing_segment_is_404() {
    let (status, body) = get("/get_volume/0.13").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_docs_page_is_html() {
    let app = create_app(create_test_state());
    let resp = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
}

#[tokio::test]
async fn test_health_reports_well_name() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["status"], "ok");
    assert_eq!(v["well"], "DEFAULT");
}

#[tokio::test]
async fn test_report_endpoint_envelope() {
    let (status, body) = get("/api/v1/report").await;
    assert_eq!(status, StatusCode::OK);

    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(v.get("meta").is_some());
    let lines = v["data"]["lines"].as_array().expect("lines array");
    let flow = lines
        .iter()
        .find(|l| l["key"] == "pump_flow_rate_m3_min")
        .expect("pump flow line");
    assert!((flow["value"].as_f64().unwrap() - 0.593_949_604_5).abs() < 1e-9);
    assert!(lines.iter().all(|l| l.get("error").is_none()));
}
