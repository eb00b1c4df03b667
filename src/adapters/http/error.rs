//! Error body shared by every endpoint.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

/// `{code, message, details?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CalculatorNotFound, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Storage failure. The cause is only exposed when `verbose` is set.
    pub fn persistence(cause: &str, verbose: bool) -> Self {
        tracing::error!(error = %cause, "Persistence failure");
        Self {
            code: "PERSISTENCE_ERROR".to_string(),
            message: "Storage is unavailable, try again later".to_string(),
            details: verbose.then(|| serde_json::json!({ "cause": cause })),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Malformed or mistyped JSON bodies are the caller's fault.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    ErrorResponse::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
        .into_response_with(StatusCode::BAD_REQUEST)
}
