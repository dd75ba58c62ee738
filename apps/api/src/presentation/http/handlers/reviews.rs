use crate::{
    application::reviews::{
        dto::{SubmitReviewRequest, SubmitReviewResponse},
        use_case::ReviewsUseCase,
    },
    domain::review::entity::Review,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::Value;

fn use_case(state: &AppState) -> ReviewsUseCase {
    ReviewsUseCase::new(state.review_repo.clone(), state.catalog.clone())
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = use_case(&state).list(&product_id).await?;
    Ok(Json(reviews))
}

pub async fn submit_review(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmitReviewResponse>, AppError> {
    let Json(body) = payload?;

    let request = SubmitReviewRequest::from_json(&body);
    let review = use_case(&state).submit(&product_id, request).await?;

    Ok(Json(SubmitReviewResponse {
        success: true,
        review,
    }))
}
