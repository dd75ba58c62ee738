use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    serviceable_areas: usize,
    products: usize,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // Orders can never be accepted with an empty area set.
    let status = if state.area_set.is_empty() {
        tracing::warn!("Health check: no serviceable pincodes loaded");
        "degraded"
    } else {
        "healthy"
    };

    let response = HealthResponse {
        status,
        serviceable_areas: state.area_set.len(),
        products: state.catalog.len(),
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}
