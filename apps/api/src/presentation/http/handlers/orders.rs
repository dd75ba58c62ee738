use crate::{
    application::place_order::{dto::PlaceOrderResponse, use_case::PlaceOrderUseCase},
    domain::order::entity::OrderRequest,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PlaceOrderResponse>, AppError> {
    let Json(body) = payload?;

    let request = OrderRequest::from_json(&body);
    let order = PlaceOrderUseCase::new(state.area_set.clone()).execute(request)?;

    Ok(Json(PlaceOrderResponse::placed(order)))
}
