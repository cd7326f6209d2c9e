//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mbudget_core::allocation::AllocationError;
use mbudget_core::session::CommitError;
use mbudget_shared::AppError;
use serde_json::{Value, json};

/// Error returned by handlers, rendered as `{ "error", "message" }` plus optional details.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    details: Option<Value>,
}

impl ApiError {
    /// Attaches structured details to the response body.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// The underlying application error.
    #[must_use]
    pub const fn app_error(&self) -> &AppError {
        &self.error
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            details: None,
        }
    }
}

impl From<AllocationError> for ApiError {
    fn from(error: AllocationError) -> Self {
        AppError::Validation(error.to_string()).into()
    }
}

impl From<CommitError> for ApiError {
    fn from(error: CommitError) -> Self {
        match error {
            CommitError::Validation(validation) => {
                let api_error: Self = AppError::BusinessRule(validation.to_string()).into();
                match serde_json::to_value(&validation) {
                    Ok(details) => api_error.with_details(details),
                    Err(_) => api_error,
                }
            }
            CommitError::Persistence(e) => AppError::ExternalService(e.to_string()).into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = json!({
            "error": self.error.error_code(),
            "message": self.error.message(),
        });
        if let Some(details) = self.details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}
