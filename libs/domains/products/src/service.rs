//! Product Service - Business logic layer

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Product operations exposed to the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Get all products owned by a seller
    async fn get_all_by_seller(&self, seller_id: &str) -> ProductResult<Vec<Product>>;
}

/// Repository-backed [`ProductService`].
///
/// Forwards every call to the repository and returns its result unchanged.
pub struct ProductServiceImpl<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductServiceImpl<R> {
    /// Create a new service that owns the given repository
    pub fn new(repository: R) -> Self {
        Self::with_shared(Arc::new(repository))
    }

    /// Create a new service on top of an already shared repository
    pub fn with_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for ProductServiceImpl<R> {
    #[instrument(skip(self))]
    async fn get_all_by_seller(&self, seller_id: &str) -> ProductResult<Vec<Product>> {
        self.repository.get_all_by_seller(seller_id).await
    }
}

impl<R: ProductRepository> Clone for ProductServiceImpl<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Two services are equal when they wrap the same repository instance.
impl<R: ProductRepository> PartialEq for ProductServiceImpl<R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.repository, &other.repository)
    }
}

impl<R: ProductRepository> fmt::Debug for ProductServiceImpl<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductServiceImpl")
            .field("repository", &Arc::as_ptr(&self.repository))
            .finish()
    }
}
