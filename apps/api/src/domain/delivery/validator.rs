//! Delivery eligibility decision for a submitted pincode.
//!
//! The format check always runs before the membership check, so a malformed
//! value is reported as such no matter what the serviceable set contains.

use super::{area_set::ServiceableAreaSet, value_objects::Pincode};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why an order cannot proceed to the given pincode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RejectionReason {
    /// Not exactly six ASCII digits.
    #[serde(rename = "invalid_pincode")]
    InvalidFormat,
    /// Well formed, but the store does not deliver there.
    #[serde(rename = "out_of_area")]
    OutOfServiceArea,
}

impl RejectionReason {
    /// Stable code returned to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_pincode",
            Self::OutOfServiceArea => "out_of_area",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "Pincode must be exactly 6 digits",
            Self::OutOfServiceArea => "Sorry, we do not deliver to this pincode yet",
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected { reason: RejectionReason },
}

impl ValidationResult {
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }

    fn rejected(reason: RejectionReason) -> Self {
        Self::Rejected { reason }
    }
}

/// Decide whether an order may be delivered to `pincode`.
pub fn validate(pincode: &str, area_set: &ServiceableAreaSet) -> ValidationResult {
    if !Pincode::is_well_formed(pincode) {
        return ValidationResult::rejected(RejectionReason::InvalidFormat);
    }
    if area_set.contains(pincode) {
        ValidationResult::Accepted
    } else {
        ValidationResult::rejected(RejectionReason::OutOfServiceArea)
    }
}

/// Same as [`validate`], treating an absent value as malformed.
pub fn validate_submitted(pincode: Option<&str>, area_set: &ServiceableAreaSet) -> ValidationResult {
    match pincode {
        Some(pincode) => validate(pincode, area_set),
        None => ValidationResult::rejected(RejectionReason::InvalidFormat),
    }
}
