//! Serviceable pincode dataset.
//!
//! The dataset is a JSON array. String entries must already be six digits.
//! Integer entries are accepted for sources that stored pincodes as numbers and
//! lost their leading zeros; they are zero-padded back to six characters
//! (`12345` becomes `"012345"`). Any other entry fails the whole load.

use crate::domain::{delivery::area_set::ServiceableAreaSet, shared::errors::DatasetError};
use serde_json::Value;
use std::path::Path;

const BUNDLED_PINCODES: &str = include_str!("../../../data/serviceable_pincodes.json");
const MAX_PINCODE: u64 = 999_999;

/// Load the serviceable area set from `path`, or the bundled dataset when `None`.
///
/// # Errors
///
/// Returns a [`DatasetError`] if the file cannot be read, is not a JSON array,
/// or contains an entry that cannot be canonicalized to a six-digit pincode.
pub fn load_serviceable_areas(path: Option<&Path>) -> Result<ServiceableAreaSet, DatasetError> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?,
        None => BUNDLED_PINCODES.to_string(),
    };
    let set = parse_serviceable_areas(&raw)?;
    tracing::info!(
        source = %path.map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
        count = set.len(),
        "Loaded serviceable pincodes"
    );
    Ok(set)
}

pub fn parse_serviceable_areas(raw: &str) -> Result<ServiceableAreaSet, DatasetError> {
    let document: Value = serde_json::from_str(raw)?;
    let entries = document.as_array().ok_or(DatasetError::NotAnArray)?;

    let codes = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            canonicalize(entry).ok_or_else(|| DatasetError::InvalidEntry {
                index,
                value: entry.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ServiceableAreaSet::from_codes(codes)
}

fn canonicalize(entry: &Value) -> Option<String> {
    match entry {
        Value::String(code) => Some(code.clone()),
        Value::Number(n) => n
            .as_u64()
            .filter(|n| *n <= MAX_PINCODE)
            .map(|n| format!("{:06}", n)),
        _ => None,
    }
}
