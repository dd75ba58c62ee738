use super::helpers::{expect_status, get, read_json, send, spawn_app, spawn_app_with};
use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn lists_bundled_products_with_sequential_ids() {
    let app = spawn_app();
    let res = expect_status(send(&app.app, get("/api/v1/products")).await, StatusCode::OK).await;

    let body: Value = read_json(res).await;
    let products = body.as_array().expect("products should be an array");
    assert_eq!(products.len(), 3);
    assert_eq!(products[0]["id"], "1");
    assert_eq!(products[2]["id"], "3");
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = spawn_app();
    let res = send(&app.app, get("/api/v1/products/99")).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn health_reports_loaded_datasets() {
    let app = spawn_app();
    let res = expect_status(send(&app.app, get("/health")).await, StatusCode::OK).await;

    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["serviceable_areas"], 3);
    assert_eq!(body["products"], 3);
}

#[tokio::test]
async fn health_flags_empty_area_set() {
    let app = spawn_app_with(&[]);
    let res = expect_status(send(&app.app, get("/health")).await, StatusCode::OK).await;

    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "degraded");
}
