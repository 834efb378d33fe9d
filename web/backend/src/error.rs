use crate::models::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use farepath_core::FareError;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Failure to produce an airport or flight snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse dataset: {0}")]
    Dataset(#[from] FareError),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidArgument(FareError),
    #[error("{0}")]
    InvalidParameter(String),
    #[error("snapshot unavailable: {0}")]
    SnapshotUnavailable(Arc<SnapshotError>),
    #[error("internal error: {0}")]
    Internal(FareError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) | ApiError::InvalidParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::SnapshotUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) | ApiError::InvalidParameter(_) => "invalid_argument",
            ApiError::SnapshotUnavailable(_) => "snapshot_unavailable",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<FareError> for ApiError {
    fn from(error: FareError) -> Self {
        if error.is_invalid_argument() {
            ApiError::InvalidArgument(error)
        } else {
            ApiError::Internal(error)
        }
    }
}

impl From<Arc<SnapshotError>> for ApiError {
    fn from(error: Arc<SnapshotError>) -> Self {
        ApiError::SnapshotUnavailable(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
