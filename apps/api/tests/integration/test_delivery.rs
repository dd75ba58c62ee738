use super::helpers::{expect_status, get, read_json, send, spawn_app};
use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn serviceable_pincode_reports_serviceable() {
    let app = spawn_app();
    let res = expect_status(send(&app.app, get("/api/v1/delivery/382000")).await, StatusCode::OK).await;

    let body: Value = read_json(res).await;
    assert_eq!(body["pincode"], "382000");
    assert_eq!(body["serviceable"], true);
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn unserviceable_pincode_is_a_normal_answer() {
    let app = spawn_app();
    let res = expect_status(send(&app.app, get("/api/v1/delivery/110001")).await, StatusCode::OK).await;

    let body: Value = read_json(res).await;
    assert_eq!(body["serviceable"], false);
    assert_eq!(body["reason"], "out_of_area");
}

#[tokio::test]
async fn malformed_pincode_is_rejected() {
    let app = spawn_app();
    let res = send(&app.app, get("/api/v1/delivery/38001")).await;
    let res = expect_status(res, StatusCode::BAD_REQUEST).await;

    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "invalid_pincode");
}
