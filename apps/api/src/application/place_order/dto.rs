use crate::domain::{delivery::validator::RejectionReason, order::entity::PlacedOrder};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlaceOrderResponse {
    pub ok: bool,
    pub message: String,
    pub order: PlacedOrder,
}

impl PlaceOrderResponse {
    pub fn placed(order: PlacedOrder) -> Self {
        Self {
            ok: true,
            message: "order placed".to_string(),
            order,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRejectedResponse {
    pub ok: bool,
    pub error: RejectionReason,
    pub message: String,
}

impl From<RejectionReason> for OrderRejectedResponse {
    fn from(reason: RejectionReason) -> Self {
        Self {
            ok: false,
            error: reason,
            message: reason.message().to_string(),
        }
    }
}
