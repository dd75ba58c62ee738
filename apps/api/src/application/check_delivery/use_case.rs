use super::dto::DeliveryCheckResponse;
use crate::domain::delivery::{
    area_set::ServiceableAreaSet,
    validator::{RejectionReason, ValidationResult, validate},
};
use std::sync::Arc;

/// Answers "do you deliver here?" without creating an order.
pub struct CheckDeliveryUseCase {
    area_set: Arc<ServiceableAreaSet>,
}

impl CheckDeliveryUseCase {
    pub fn new(area_set: Arc<ServiceableAreaSet>) -> Self {
        Self { area_set }
    }

    /// A malformed pincode is an error; an unserviceable one is a normal answer.
    pub fn execute(&self, pincode: &str) -> Result<DeliveryCheckResponse, RejectionReason> {
        match validate(pincode, &self.area_set) {
            ValidationResult::Accepted => Ok(DeliveryCheckResponse {
                pincode: pincode.to_string(),
                serviceable: true,
                reason: None,
            }),
            ValidationResult::Rejected {
                reason: RejectionReason::OutOfServiceArea,
            } => Ok(DeliveryCheckResponse {
                pincode: pincode.to_string(),
                serviceable: false,
                reason: Some(RejectionReason::OutOfServiceArea),
            }),
            ValidationResult::Rejected { reason } => Err(reason),
        }
    }
}
