//! Test fixtures for scheduling API tests
//!
//! Factory functions for routers, requests and response decoding shared by
//! the integration tests.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use bookly_config::{AppConfig, SlotPolicy};
use bookly_scheduling::{routes, SchedulingState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const PASSCODE: &str = "test-passcode";
pub const TUESDAY: &str = "2025-10-28";
pub const SATURDAY: &str = "2025-11-01";
pub const NINE_AM: &str = "09:00 AM - 10:00 AM";

pub fn create_test_config(policy: SlotPolicy) -> AppConfig {
    let mut config = AppConfig::for_passcode(PASSCODE);
    config.scheduling.slot_policy = policy;
    config
}

pub fn create_test_app() -> Router {
    create_test_app_with_policy(SlotPolicy::Hourly)
}

pub fn create_test_app_with_policy(policy: SlotPolicy) -> Router {
    let state = SchedulingState::in_memory(&create_test_config(policy))
        .expect("test config has a passcode");
    routes(Arc::new(state))
}

pub fn booking_body(date: &str, time: &str, name: &str) -> Value {
    json!({
        "date": date,
        "time": time,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "address": "1 Main St",
    })
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri).method("GET");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_request(uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        post_request("/admin/login", &json!({ "passcode": PASSCODE }), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub async fn available_times(app: &Router, date: &str) -> Vec<String> {
    let (status, body) = send(
        app,
        get_request(&format!("/availability?date={}", date), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body["availableTimes"].clone()).unwrap()
}
