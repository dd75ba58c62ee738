use crate::domain::{
    review::{entity::Review, repository::ReviewRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local review store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: RwLock<Vec<Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, review: &Review) -> Result<Review, DomainError> {
        self.reviews.write().await.push(review.clone());
        Ok(review.clone())
    }

    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        // Reverse insertion order first so equal timestamps still list the latest first.
        let mut matching: Vec<Review> = reviews
            .iter()
            .rev()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(matching)
    }
}
