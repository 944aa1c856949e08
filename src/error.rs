//! Error types for the sheet gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Fetch Error Enum ==
/// Unified error type for the fetch pipeline.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Missing or malformed credentials / configuration.
    /// Raised before any remote call is made.
    #[error("configuration error: {0}")]
    Config(String),

    /// The remote spreadsheet API failed. Carries the underlying message
    /// verbatim so the response body can surface it after retry exhaustion.
    #[error("{0}")]
    Remote(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        // The wire contract reports failures in the response body, not the
        // status line, so every answer from `/` is a 200 with a structured
        // `status` field.
        let body = Json(ErrorResponse::new(self.to_string()));
        (StatusCode::OK, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the fetch pipeline.
pub type Result<T> = std::result::Result<T, FetchError>;
