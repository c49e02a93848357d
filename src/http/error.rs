//! API error taxonomy and HTTP status mapping.
//!
//! # Responsibilities
//! - Enumerate every recognized failure category
//! - Map each category to its HTTP status code
//! - Render errors as the structured JSON body
//!
//! # Design Decisions
//! - One enum, one lookup per axis (category, status); no dynamic dispatch
//! - Every failure is terminal for its request; nothing propagates to the
//!   client as an unstructured fault
//! - `Internal` carries no cause detail in the response body

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::response::ErrorResponse;

/// Every failure the API can report, each tied to one taxonomy category.
///
/// Some variants have no trigger in the current route set (there are no
/// body-accepting endpoints) but stay in the taxonomy so the wire contract
/// is complete.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed schema validation.
    #[error("Invalid input: {0}")]
    ValidationFailed(String),

    /// Caller-supplied argument rejected by a handler.
    #[error("{0}")]
    InvalidArgument(String),

    /// Path or query value had the wrong type.
    #[error("Invalid parameter type: {0}")]
    TypeMismatch(String),

    /// Request body could not be parsed.
    #[error("Request body is malformed or missing")]
    MalformedJson,

    /// Required query parameter was absent.
    #[error("Required parameter '{0}' is missing")]
    MissingParameter(&'static str),

    /// Required path variable was absent.
    #[error("Required path variable '{0}' is missing")]
    MissingPathVariable(&'static str),

    /// No route or resource matched the request.
    #[error("The requested resource was not found")]
    NotFound,

    /// Route exists but not for this HTTP method.
    #[error("HTTP method '{0}' is not supported for this endpoint")]
    MethodNotAllowed(String),

    /// Request content type is not supported.
    #[error("Media type '{0}' is not supported")]
    UnsupportedMediaType(String),

    /// No acceptable response content type.
    #[error("Requested media type is not acceptable")]
    NotAcceptable,

    /// Value could not be parsed as a number.
    #[error("The provided value is not a valid number")]
    InvalidNumberFormat,

    /// Arithmetic failure during computation.
    #[error("Mathematical operation failed: {0}")]
    Arithmetic(String),

    /// Catch-all; the response body never exposes the cause.
    #[error("An unexpected error occurred")]
    Internal,
}

impl ApiError {
    /// Short taxonomy label reported in the `category` field.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::ValidationFailed(_) => "Validation Failed",
            ApiError::InvalidArgument(_) => "Invalid Argument",
            ApiError::TypeMismatch(_) => "Type Mismatch",
            ApiError::MalformedJson => "Malformed JSON",
            ApiError::MissingParameter(_) => "Missing Parameter",
            ApiError::MissingPathVariable(_) => "Missing Path Variable",
            ApiError::NotFound => "Not Found",
            ApiError::MethodNotAllowed(_) => "Method Not Allowed",
            ApiError::UnsupportedMediaType(_) => "Unsupported Media Type",
            ApiError::NotAcceptable => "Not Acceptable",
            ApiError::InvalidNumberFormat => "Invalid Number Format",
            ApiError::Arithmetic(_) => "Arithmetic Error",
            ApiError::Internal => "Internal Server Error",
        }
    }

    /// HTTP status consistent with the category.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ValidationFailed(_)
            | ApiError::InvalidArgument(_)
            | ApiError::TypeMismatch(_)
            | ApiError::MalformedJson
            | ApiError::MissingParameter(_)
            | ApiError::MissingPathVariable(_)
            | ApiError::InvalidNumberFormat
            | ApiError::Arithmetic(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(category = self.category(), "request failed");
        } else {
            tracing::debug!(category = self.category(), detail = %self, "request rejected");
        }

        let body = ErrorResponse {
            category: self.category().to_string(),
            detail: self.to_string(),
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
