use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("seller_id query param is required")]
    MissingSellerId,

    /// Failure reported by the repository; the message reaches clients verbatim.
    #[error("{0}")]
    Repository(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::MissingSellerId | ProductError::InvalidQuery(_) => {
                AppError::BadRequest(err.to_string())
            }
            ProductError::Repository(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
