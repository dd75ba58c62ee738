use super::entity::Review;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, DomainError>;
    /// Reviews for one product, newest first.
    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Review>, DomainError>;
}
