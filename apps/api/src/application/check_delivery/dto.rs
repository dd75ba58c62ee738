use crate::domain::delivery::validator::RejectionReason;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryCheckResponse {
    pub pincode: String,
    pub serviceable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
}
