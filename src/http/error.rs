//! Mapping from service failures to HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use super::dto::ErrorBody;
use crate::message::services::MessageServiceError;

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was not valid JSON for the route.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] MessageServiceError),
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Returns the status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::Service(MessageServiceError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let description = if status.is_server_error() {
            error!(error = %self, "request failed");
            "internal server error".to_owned()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error: description })).into_response()
    }
}
