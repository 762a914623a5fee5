use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// JSON response body pretty-printed with four-space indentation.
/// Drop-in for `axum::Json` on the response side.
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(128);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        match self.0.serialize(&mut ser) {
            Ok(()) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                buf,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("failed to serialize response body: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
                    e.to_string(),
                )
                    .into_response()
            }
        }
    }
}
