use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A customer's rating and comment on a catalog product.
///
/// `rating` is 1 to 5 and `review` is already trimmed; both are checked before
/// a review is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Review {
    pub id: Uuid,
    pub product_id: String,
    pub rating: u8,
    pub review: String,
    pub author_name: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Review {
    pub fn new(product_id: String, rating: u8, review: String, author_name: Option<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            product_id,
            rating,
            review,
            author_name,
            timestamp: Utc::now(),
        }
    }
}
