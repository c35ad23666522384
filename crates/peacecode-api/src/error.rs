use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use peacecode_instruments::error::ScreeningError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// Well-formed request whose answers don't fit the instrument.
    Unprocessable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ScreeningError> for ApiError {
    fn from(e: ScreeningError) -> Self {
        match e {
            ScreeningError::UnknownInstrument(_) => ApiError::NotFound(e.to_string()),
            ScreeningError::InvalidResponseLength { .. }
            | ScreeningError::InvalidOptionIndex { .. }
            | ScreeningError::NoSuchItem { .. }
            | ScreeningError::Incomplete { .. } => {
                tracing::debug!(error = %e, "rejected response set");
                ApiError::Unprocessable(e.to_string())
            }
            ScreeningError::NoSeverityBand { .. } => ApiError::Internal(e.to_string()),
        }
    }
}
