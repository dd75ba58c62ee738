use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Storefront API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/products": { "get": { "summary": "List catalog products" } },
            "/api/v1/products/{id}": { "get": { "summary": "Get product by id" } },
            "/api/v1/products/{id}/reviews": {
                "get": { "summary": "List product reviews, newest first" },
                "post": { "summary": "Submit a review (rating 1-5, text of at least 10 characters)" }
            },
            "/api/reviews/{id}": {
                "get": { "summary": "Legacy alias for GET /api/v1/products/{id}/reviews" },
                "post": { "summary": "Legacy alias for POST /api/v1/products/{id}/reviews" }
            },
            "/api/v1/delivery/{pincode}": { "get": { "summary": "Check whether a pincode is serviceable" } },
            "/api/v1/orders": { "post": { "summary": "Place an order (rejected with invalid_pincode or out_of_area)" } },
            "/place_order": { "post": { "summary": "Legacy alias for POST /api/v1/orders" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
