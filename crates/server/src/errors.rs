use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with. The `Display` text is the stable
/// message sent to clients; driver details stay in the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid album id")]
    InvalidId,
    #[error("invalid album payload")]
    InvalidPayload,
    #[error("album not found")]
    NotFound,
    #[error("not found")]
    NoRoute,
    #[error("internal server error")]
    Internal(#[source] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::NoRoute => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { .. } => ApiError::NotFound,
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!(op = e.op(), error = %e, "data access failed");
        }
        let status = self.status();
        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}
