//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Groombook
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Note that the availability engine itself never fails: a closed day or a
//! fully booked day comes back as an ordinary slot list. The errors mapped
//! here are the caller-side lookups around it, such as a missing contact row
//! or an unknown service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use groombook_core::errors::SalonError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `SalonError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub SalonError);

/// Converts application errors to HTTP responses.
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SalonError::NotFound(_) => StatusCode::NOT_FOUND,
            SalonError::Validation(_) => StatusCode::BAD_REQUEST,
            SalonError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SalonError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from SalonError to AppError.
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, SalonError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<SalonError> for AppError {
    fn from(err: SalonError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// Repository functions return `eyre::Result`; this wraps their errors in a
/// `SalonError::Database` variant so handlers can use `?` directly.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SalonError::Database(err))
    }
}

/// Maps a SalonError to an HTTP response.
pub fn map_error(err: SalonError) -> Response {
    AppError(err).into_response()
}
