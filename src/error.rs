//! Errors surfaced to HTTP clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::http::json::IndentedJson;

/// Every failure a handler can report. Each variant maps to one status code
/// and a fixed `{"message": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No album carries the requested id.
    #[error("album not found")]
    AlbumNotFound,

    /// No route matches the request method and path.
    #[error("page not found")]
    PageNotFound,

    /// The create body could not be bound into an album.
    #[error("invalid album")]
    MalformedRequest(Vec<String>),

    /// A handler panicked.
    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [String]>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AlbumNotFound | ApiError::PageNotFound => StatusCode::NOT_FOUND,
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let errors = match &self {
            ApiError::MalformedRequest(errors) => Some(errors.as_slice()),
            _ => None,
        };
        let body = ErrorBody {
            message: self.to_string(),
            errors,
        };
        (self.status(), IndentedJson(body)).into_response()
    }
}
