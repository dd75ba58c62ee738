use super::helpers::{expect_status, get, post_json, read_json, send, spawn_app};
use axum::{Router, http::StatusCode};
use serde_json::{Value, json};

async fn submit(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let res = send(app, post_json(uri, body.to_string())).await;
    let status = res.status();
    (status, read_json(res).await)
}

#[tokio::test]
async fn reviews_are_listed_newest_first() {
    let app = spawn_app();

    for (rating, text) in [
        (5, "Loved it, skin feels fresh."),
        (3, "Decent wash, a bit drying."),
        (4, "Good value for the price."),
    ] {
        let (status, body) = submit(
            &app.app,
            "/api/v1/products/1/reviews",
            json!({ "rating": rating, "review": text }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    let res = expect_status(
        send(&app.app, get("/api/v1/products/1/reviews")).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;
    let texts: Vec<&str> = body
        .as_array()
        .expect("reviews should be an array")
        .iter()
        .map(|r| r["review"].as_str().expect("review text"))
        .collect();
    assert_eq!(
        texts,
        vec![
            "Good value for the price.",
            "Decent wash, a bit drying.",
            "Loved it, skin feels fresh."
        ]
    );
}

#[tokio::test]
async fn reviews_are_scoped_to_their_product() {
    let app = spawn_app();
    submit(
        &app.app,
        "/api/reviews/2",
        json!({ "rating": 4, "review": "Nice cream, light texture." }),
    )
    .await;

    let res = expect_status(send(&app.app, get("/api/reviews/1")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body, json!([]));

    let res = expect_status(send(&app.app, get("/api/reviews/2")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["rating"], 4);
}

#[tokio::test]
async fn invalid_reviews_are_rejected_with_message() {
    let app = spawn_app();

    for payload in [
        json!({ "rating": 0, "review": "Long enough review text" }),
        json!({ "rating": 6, "review": "Long enough review text" }),
        json!({ "rating": 5, "review": "   short   " }),
        json!({ "review": "Long enough review text" }),
        json!({ "rating": 5 }),
    ] {
        let (status, body) = submit(&app.app, "/api/v1/products/1/reviews", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid rating or review too short.");
    }

    let res = expect_status(
        send(&app.app, get("/api/v1/products/1/reviews")).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn unknown_product_reviews_are_not_found() {
    let app = spawn_app();

    let res = send(&app.app, get("/api/v1/products/99/reviews")).await;
    expect_status(res, StatusCode::NOT_FOUND).await;

    let (status, _) = submit(
        &app.app,
        "/api/v1/products/99/reviews",
        json!({ "rating": 5, "review": "Great product overall" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
