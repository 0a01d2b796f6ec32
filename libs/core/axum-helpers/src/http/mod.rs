//! HTTP response helpers.
//!
//! - [`Utf8Json`]: JSON responder that always declares `charset=utf-8`
//! - [`security_headers`]: middleware adding defensive response headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{security_headers, Utf8Json};
//!
//! async fn list() -> Utf8Json<Vec<String>> {
//!     Utf8Json(vec!["a".to_string()])
//! }
//!
//! let app = Router::new()
//!     .route("/", get(list))
//!     .layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod json;
pub mod security;

pub use json::{APPLICATION_JSON_UTF8, Utf8Json};
pub use security::security_headers;
