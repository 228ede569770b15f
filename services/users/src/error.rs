//! HTTP-facing error type for the users service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::service::UserServiceError;

/// Custom error type for the HTTP layer
///
/// Every variant renders as a plain-text body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body could not be decoded
    #[error("Invalid JSON")]
    InvalidJson,

    /// Bad request with message
    #[error("{0}")]
    BadRequest(String),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with message
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a creation failure; all of them are reported as client errors
    pub fn creation(err: UserServiceError) -> Self {
        ApiError::BadRequest(err.to_string())
    }

    pub fn listing(err: UserServiceError) -> Self {
        ApiError::Internal(err.to_string())
    }

    pub fn lookup(err: UserServiceError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
