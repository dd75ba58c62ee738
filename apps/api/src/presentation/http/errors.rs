//! HTTP error handling and response conversion.
//!
//! Errors are mapped to HTTP status codes and JSON bodies here. Delivery
//! rejections are client outcomes rather than faults: they carry a stable
//! reason code and are logged below warning level.

use crate::{
    application::place_order::dto::OrderRejectedResponse,
    domain::{delivery::validator::RejectionReason, shared::errors::DomainError},
};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Request body could not be understood (400).
    BadRequest(String),

    /// Request body refused before parsing, e.g. too large (413) or not JSON (415).
    PayloadRejected { status: StatusCode, message: String },

    /// Submitted fields failed validation (400).
    ValidationError(String),

    /// Order or delivery check rejected for the given pincode (400).
    Rejected(RejectionReason),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::PayloadRejected { status, message } => {
                write!(f, "Payload rejected ({}): {}", status.as_u16(), message)
            }
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Rejected(reason) => write!(f, "Rejected: {}", reason),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) | Self::Rejected(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadRejected { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource not found".into(),
            Self::BadRequest(msg) | Self::ValidationError(msg) => msg.clone(),
            Self::PayloadRejected { message, .. } => message.clone(),
            Self::Rejected(reason) => reason.message().into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Rejected(_) => tracing::debug!("error={}", self),
            Self::Internal(_) => tracing::error!("error={}", self),
            Self::BadRequest(_)
            | Self::PayloadRejected { .. }
            | Self::ValidationError(_)
            | Self::NotFound(_) => tracing::warn!("error={}", self),
        }

        match self {
            Self::Rejected(reason) => {
                (status, Json(OrderRejectedResponse::from(reason))).into_response()
            }
            // Review endpoints keep the storefront's `{success, message}` shape.
            Self::ValidationError(message) => {
                (status, Json(json!({ "success": false, "message": message }))).into_response()
            }
            other => {
                let message = other.user_message();
                (status, Json(json!({ "ok": false, "error": message }))).into_response()
            }
        }
    }
}

// === Domain Error Conversion ===

impl From<RejectionReason> for AppError {
    fn from(reason: RejectionReason) -> Self {
        AppError::Rejected(reason)
    }
}

// === Extractor Rejection Conversion ===

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            status @ (StatusCode::PAYLOAD_TOO_LARGE | StatusCode::UNSUPPORTED_MEDIA_TYPE) => {
                AppError::PayloadRejected {
                    status,
                    message: rejection.body_text(),
                }
            }
            _ => {
                tracing::debug!(rejection = %rejection, "Unreadable JSON payload");
                AppError::BadRequest("Invalid data".into())
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
        }
    }
}
