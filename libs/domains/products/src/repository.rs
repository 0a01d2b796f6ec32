use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for seller product lookups
///
/// Implementations can use different storage backends; handlers and services
/// only see this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get all products owned by a seller
    async fn get_all_by_seller(&self, seller_id: &str) -> ProductResult<Vec<Product>>;
}

/// Placeholder repository that always answers with the same single product.
///
/// No storage backs it and `seller_id` is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticProductRepository;

impl StaticProductRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProductRepository for StaticProductRepository {
    async fn get_all_by_seller(&self, seller_id: &str) -> ProductResult<Vec<Product>> {
        tracing::debug!(seller_id, "Returning static product listing");

        Ok(vec![Product {
            id: "mock".to_string(),
            seller_id: "FEX112AC".to_string(),
            description: "generic product".to_string(),
            price: 123.55,
        }])
    }
}
