//! Error handlers
//!
//! Maps errors to HTTP status codes and JSON error bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};

use crate::error::types::{ApiError, StorageError};
use crate::protocol::responses::ErrorBody;

/// Log an API error at a level matching its status class
pub fn handle_error(err: &ApiError) {
    if error_to_status(err).is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }
}

/// Convert error to HTTP status code
pub fn error_to_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
        ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ApiError::Storage(e) => storage_error_to_status(e),
    }
}

fn storage_error_to_status(err: &StorageError) -> StatusCode {
    match err {
        StorageError::NotFound(_) => StatusCode::NOT_FOUND,
        StorageError::NotAFile(_) => StatusCode::BAD_REQUEST,
        StorageError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
        StorageError::Forbidden(_) => StatusCode::FORBIDDEN,
        StorageError::DecodeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        StorageError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        handle_error(&self);
        let status = error_to_status(&self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn client_problems_are_bad_requests() {
        assert_eq!(
            error_to_status(&ApiError::MissingField("content")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_to_status(&StorageError::NotAFile("notes".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_to_status(&StorageError::AlreadyExists("notes".into()).into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_resources_and_escapes() {
        assert_eq!(
            error_to_status(&StorageError::NotFound("a.md".into()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_to_status(&StorageError::Forbidden("../a.md".into()).into()),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn unanticipated_failures_are_server_errors() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            error_to_status(&StorageError::from(io_err).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_to_status(&StorageError::DecodeError("blob.bin".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_field_messages() {
        assert_eq!(
            ApiError::MissingField("content").to_string(),
            "No content provided"
        );
        assert_eq!(ApiError::MissingField("path").to_string(), "No path provided");
    }
}
