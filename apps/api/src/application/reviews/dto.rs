use crate::domain::review::entity::Review;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use validator::Validate;

pub const INVALID_REVIEW_MESSAGE: &str = "Invalid rating or review too short.";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct SubmitReviewRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating: i64,
    #[validate(length(min = 10))]
    pub review: String,
    pub author_name: Option<String>,
}

impl SubmitReviewRequest {
    /// Read a review form leniently: a missing or non-numeric rating becomes 0
    /// and the text is trimmed, so both fall to validation rather than to a
    /// parse error.
    pub fn from_json(body: &Value) -> Self {
        let rating = match body.get("rating") {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        };
        let review = body
            .get("review")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_owned())
            .unwrap_or_default();
        let author_name = body
            .get("author_name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        Self {
            rating,
            review,
            author_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitReviewResponse {
    pub success: bool,
    pub review: Review,
}
