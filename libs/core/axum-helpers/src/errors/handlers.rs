use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, messages};
use crate::http::Utf8Json;

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Utf8Json(ErrorResponse::new(messages::NOT_FOUND_RESOURCE)),
    )
        .into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Utf8Json(ErrorResponse::new(messages::METHOD_NOT_ALLOWED)),
    )
        .into_response()
}
