use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::MessageResponse;

/// Message returned when a create request lacks a required report field
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields for the report.";

#[derive(Debug, Error)]
pub enum AppError {
    /// One or more required fields were absent or empty
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingField(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Storage backend failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::MissingField(fields) => (
                StatusCode::BAD_REQUEST,
                MISSING_FIELDS_MESSAGE.to_string(),
                Some(fields),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(MessageResponse::with_errors(message, errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_maps_to_bad_request() {
        let response =
            AppError::MissingField(vec!["title".to_string(), "photo_url".to_string()])
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_field_display_lists_fields() {
        let err = AppError::MissingField(vec!["summary".to_string(), "location".to_string()]);
        assert_eq!(err.to_string(), "Missing required fields: summary, location");
    }

    #[test]
    fn test_internal_hides_detail() {
        let response = AppError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
