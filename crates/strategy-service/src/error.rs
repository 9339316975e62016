use analytics::AnalyticsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use events::{ErrorBody, FailureReport};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No data provided")]
    NoData,

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Converts our custom `ServiceError` into an HTTP response.
///
/// Validation failures answer `400 {"error": ...}` (`413` for a body over the size
/// limit); anything that went wrong while computing the report answers
/// `500 {"status": "error", "error_message": ...}`.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::NoData
            | ServiceError::InvalidPayload(_)
            | ServiceError::PayloadTooLarge(_) => {
                tracing::warn!(error = %self, "Rejected strategy request.");
                let status = match self {
                    ServiceError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
                    _ => StatusCode::BAD_REQUEST,
                };
                let body = Json(ErrorBody {
                    error: self.to_string(),
                });
                (status, body).into_response()
            }
            ServiceError::Analytics(_) | ServiceError::Internal(_) => {
                tracing::error!(error = %self, "Strategy analysis failed.");
                let body = Json(FailureReport::new(self.to_string()));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
