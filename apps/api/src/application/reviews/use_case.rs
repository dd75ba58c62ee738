use super::dto::{INVALID_REVIEW_MESSAGE, SubmitReviewRequest};
use crate::domain::{
    catalog::entity::Catalog,
    review::{entity::Review, repository::ReviewRepository},
    shared::errors::DomainError,
};
use std::sync::Arc;
use validator::Validate;

pub struct ReviewsUseCase {
    repository: Arc<dyn ReviewRepository>,
    catalog: Arc<Catalog>,
}

impl ReviewsUseCase {
    pub fn new(repository: Arc<dyn ReviewRepository>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn list(&self, product_id: &str) -> Result<Vec<Review>, DomainError> {
        self.ensure_product(product_id)?;
        self.repository.find_by_product(product_id).await
    }

    pub async fn submit(
        &self,
        product_id: &str,
        request: SubmitReviewRequest,
    ) -> Result<Review, DomainError> {
        self.ensure_product(product_id)?;
        if let Err(e) = request.validate() {
            tracing::debug!(product_id, errors = %e, "Review rejected");
            return Err(DomainError::ValidationError(INVALID_REVIEW_MESSAGE.into()));
        }

        // Validated to 1..=5 above.
        let rating = request.rating as u8;
        let review = Review::new(
            product_id.to_string(),
            rating,
            request.review,
            request.author_name,
        );
        let saved = self.repository.create(&review).await?;
        tracing::info!(product_id, review_id = %saved.id, rating, "Review saved");
        Ok(saved)
    }

    fn ensure_product(&self, product_id: &str) -> Result<(), DomainError> {
        match self.catalog.find(product_id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(format!("product {}", product_id))),
        }
    }
}
