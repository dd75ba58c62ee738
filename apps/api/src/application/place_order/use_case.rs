use crate::domain::{
    delivery::{
        area_set::ServiceableAreaSet,
        validator::{RejectionReason, ValidationResult, validate_submitted},
        value_objects::Pincode,
    },
    order::entity::{OrderRequest, PlacedOrder},
};
use std::sync::Arc;

pub struct PlaceOrderUseCase {
    area_set: Arc<ServiceableAreaSet>,
}

impl PlaceOrderUseCase {
    pub fn new(area_set: Arc<ServiceableAreaSet>) -> Self {
        Self { area_set }
    }

    /// Accept the order only if its pincode is well formed and serviceable.
    pub fn execute(&self, request: OrderRequest) -> Result<PlacedOrder, RejectionReason> {
        match validate_submitted(request.pincode.as_deref(), &self.area_set) {
            ValidationResult::Accepted => {
                let OrderRequest {
                    pincode,
                    customer,
                    products,
                } = request;
                let pincode = Pincode::new(pincode.unwrap_or_default())
                    .map_err(|_| RejectionReason::InvalidFormat)?;
                let order = PlacedOrder::new(pincode, customer, products);
                tracing::info!(
                    order_id = %order.id,
                    pincode = order.pincode.as_str(),
                    items = order.item_count,
                    "Order accepted"
                );
                Ok(order)
            }
            ValidationResult::Rejected { reason } => {
                tracing::info!(reason = %reason, "Order rejected");
                Err(reason)
            }
        }
    }
}
