use afcon_booking::FlowError;
use afcon_core::catalog::CatalogError;
use afcon_core::input::InputError;
use afcon_core::submission::SubmissionError;
use afcon_core::FieldError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, fields: Vec<FieldError> },
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    /// An upstream service failed; the client may retry.
    Upstream { message: String, retryable: bool },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { message, fields } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": message, "fields": fields }),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::Upstream { message, retryable } => {
                tracing::warn!("Upstream failure: {}", message);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": message, "retryable": retryable }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Validation(e) => AppError::Validation {
                message: e.to_string(),
                fields: e.fields,
            },
            FlowError::NotFound(_) => AppError::NotFound(err.to_string()),
            FlowError::Submission(e) => e.into(),
            FlowError::OutOfOrder { .. }
            | FlowError::InputMismatch { .. }
            | FlowError::Incomplete { .. }
            | FlowError::AlreadySubmitted => AppError::Conflict(err.to_string()),
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        AppError::Upstream {
            retryable: err.is_retryable(),
            message: err.to_string(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Status { status: 404, .. } => AppError::NotFound(err.to_string()),
            _ => AppError::Upstream {
                message: err.to_string(),
                retryable: true,
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
