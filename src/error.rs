// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

/// The caller's `message` was missing, not a string, or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Message parameter is required and must be a non-empty string.")]
pub struct ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Host-level fault. `details` is only filled in when verbose errors are on.
    #[error("An unexpected server error occurred.")]
    Unexpected { details: Option<String> },
}

impl AppError {
    pub fn unexpected(cause: impl std::fmt::Display, verbose: bool) -> Self {
        let cause = cause.to_string();
        tracing::error!(error = %cause, "unhandled server error");
        AppError::Unexpected {
            details: verbose.then_some(cause),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
            details: match self {
                AppError::Unexpected { details } => details,
                AppError::Validation(_) => None,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::from(ValidationError);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Message parameter is required and must be a non-empty string."
        );
    }

    #[test]
    fn unexpected_hides_details_unless_verbose() {
        match AppError::unexpected("boom", false) {
            AppError::Unexpected { details } => assert_eq!(details, None),
            other => panic!("unexpected variant: {other:?}"),
        }
        match AppError::unexpected("boom", true) {
            AppError::Unexpected { details } => assert_eq!(details.as_deref(), Some("boom")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn unexpected_maps_to_internal_error() {
        let err = AppError::Unexpected { details: None };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "An unexpected server error occurred.");
    }
}
