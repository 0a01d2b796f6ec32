//! Products API routes

use axum::Router;
use domain_products::{handlers, ProductServiceImpl, StaticProductRepository};

/// Create products router
pub fn router() -> Router {
    let repository = StaticProductRepository::new();
    let service = ProductServiceImpl::new(repository);
    handlers::router(service)
}
