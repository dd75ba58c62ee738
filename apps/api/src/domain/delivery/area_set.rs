use super::value_objects::Pincode;
use crate::domain::shared::errors::DatasetError;
use std::collections::HashSet;

/// Pincodes the store currently delivers to.
///
/// Built once during startup and shared read-only for the lifetime of the
/// process; there is no way to mutate it after construction. Every member is
/// a well-formed six-digit pincode.
#[derive(Debug, Clone, Default)]
pub struct ServiceableAreaSet {
    pincodes: HashSet<String>,
}

impl ServiceableAreaSet {
    /// Build the set from raw codes, rejecting anything that is not six digits.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidEntry`] for the first malformed code.
    pub fn from_codes<I, S>(codes: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pincodes = HashSet::new();
        for (index, code) in codes.into_iter().enumerate() {
            let code = code.into();
            match Pincode::new(code.clone()) {
                Ok(pincode) => {
                    pincodes.insert(pincode.into_inner());
                }
                Err(_) => return Err(DatasetError::InvalidEntry { index, value: code }),
            }
        }
        Ok(Self { pincodes })
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.pincodes.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.pincodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pincodes.is_empty()
    }
}
