use thiserror::Error;

/// Problems found while building the serviceable area set from its source data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Dataset must be a JSON array")]
    NotAnArray,
    #[error("Invalid dataset entry at index {index}: {value}")]
    InvalidEntry { index: usize, value: String },
}

/// Failures surfaced by repositories and use cases.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
