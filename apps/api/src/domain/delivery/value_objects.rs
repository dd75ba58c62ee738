use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    // ASCII only: `\d` would also admit other Unicode decimal digits.
    static ref PINCODE_REGEX: regex::Regex = regex::Regex::new(r"^[0-9]{6}$").unwrap();
}

/// A six-digit postal delivery area code, kept as a string so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct Pincode {
    #[validate(regex(path = *PINCODE_REGEX))]
    pub value: String,
}

impl Pincode {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let pincode = Self { value };
        pincode.validate()?;
        Ok(pincode)
    }

    pub fn is_well_formed(candidate: &str) -> bool {
        PINCODE_REGEX.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}
