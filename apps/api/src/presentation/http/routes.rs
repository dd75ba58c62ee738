use super::{
    handlers::{delivery, docs, health, orders, products, reviews},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Catalog
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/products/{id}", get(products::get_product))
        // Reviews
        .route(
            "/api/v1/products/{id}/reviews",
            get(reviews::list_reviews).post(reviews::submit_review),
        )
        .route(
            "/api/reviews/{id}",
            get(reviews::list_reviews).post(reviews::submit_review),
        )
        // Delivery
        .route("/api/v1/delivery/{pincode}", get(delivery::check_delivery))
        // Orders
        .route("/api/v1/orders", post(orders::place_order))
        .route("/place_order", post(orders::place_order))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
