use axum::{
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::AppError;

pub const APPLICATION_JSON_UTF8: &str = "application/json; charset=utf-8";

/// JSON response with `Content-Type: application/json; charset=utf-8`.
///
/// `axum::Json` emits a bare `application/json`; clients of this workspace's
/// public APIs expect the charset parameter on every JSON body, errors included.
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct Utf8Json<T>(pub T);

impl<T: Serialize> IntoResponse for Utf8Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(APPLICATION_JSON_UTF8),
                )],
                body,
            )
                .into_response(),
            Err(err) => AppError::SerdeJson(err).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_utf8_json_sets_content_type_and_body() {
        let response = Utf8Json(json!([{ "ID": "1" }])).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_JSON_UTF8
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!([{ "ID": "1" }]));
    }

    #[tokio::test]
    async fn test_utf8_json_serialization_failure_is_internal_error() {
        // Maps with non-string keys cannot be encoded as JSON objects
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "value");

        let response = Utf8Json(map).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_JSON_UTF8
        );
    }
}
