//! API error types with HTTP response mapping.

use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bmi::ValidationError;

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as `{"detail": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    /// Request passed deserialization but failed calculator validation.
    Validation(ValidationError),
    /// Request body could not be read or decoded as JSON.
    Rejected { status: StatusCode, message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(err) => {
                tracing::warn!(reason = err.reason(), "rejected invalid bmi request");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Rejected { status, message } => {
                tracing::warn!(%status, error = %message, "rejected malformed request body");
                (status, message)
            }
        };

        let body = serde_json::json!({ "detail": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
