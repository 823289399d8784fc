//! Error-to-response mapping for API handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use attest_core::workflow::WorkflowError;
use attest_shared::AppError;

/// Errors surfaced by API handlers.
///
/// Workflow permission failures keep their own variant so a denied
/// transition is reported distinctly from transport or lookup failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Application-level failure (validation, lookup, internal).
    #[error(transparent)]
    App(#[from] AppError),
    /// Workflow permission failure.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

impl ApiError {
    fn parts(&self) -> (u16, &'static str, String) {
        match self {
            Self::App(err) => (err.status_code(), err.error_code(), err.to_string()),
            Self::Workflow(err) => (err.status_code(), err.error_code(), err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));
        (status, body).into_response()
    }
}
