//! API routes module

pub mod products;

use axum::Router;

/// Create all API routes (mounted under `/api` by the server)
pub fn routes() -> Router {
    Router::new().nest("/v1/products", products::router())
}
