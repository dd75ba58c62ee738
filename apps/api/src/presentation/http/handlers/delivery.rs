use crate::{
    application::check_delivery::{dto::DeliveryCheckResponse, use_case::CheckDeliveryUseCase},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State},
};

pub async fn check_delivery(
    State(state): State<AppState>,
    Path(pincode): Path<String>,
) -> Result<Json<DeliveryCheckResponse>, AppError> {
    let response = CheckDeliveryUseCase::new(state.area_set.clone()).execute(&pincode)?;
    Ok(Json(response))
}
