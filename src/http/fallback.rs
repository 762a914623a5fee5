use std::any::Any;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Catch-all for unmatched paths, and for known paths hit with an
/// unsupported method (no 405s are ever sent).
pub async fn page_not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "no route");
    ApiError::PageNotFound
}

/// Turns a handler panic into a 500 with the usual error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!("handler panicked: {}", detail);
    ApiError::Internal.into_response()
}
