#![allow(dead_code)]
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use chrono::NaiveDate;
use longweekend_backend::{
    app, config::Config, services::holiday_source::HolidaySourceStub, state::AppState,
};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        holiday_api_url: "http://holidays.invalid/api/v3/PublicHolidays".into(),
        holiday_api_timeout_seconds: 1,
        holiday_api_user_agent: "longweekend-backend-tests".into(),
        time_zone: chrono_tz::UTC,
        bind_addr: "127.0.0.1:0".parse().expect("bind addr"),
        cors_allow_origins: vec!["http://localhost:8000".into()],
    }
}

pub fn test_app(stub: HolidaySourceStub) -> Router {
    app(AppState::new(test_config(), Arc::new(stub)))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let bytes = body_bytes(response).await;
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = get(app, uri).await;
    let status = response.status();
    let bytes = body_bytes(response).await;
    (status, String::from_utf8(bytes).expect("utf-8 body"))
}
