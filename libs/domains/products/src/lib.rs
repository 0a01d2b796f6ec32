//! Products Domain
//!
//! Lists the products that belong to a seller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /?seller_id=..., JSON responses
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Delegation to the repository
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + static implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, query parameters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, ProductServiceImpl, StaticProductRepository};
//!
//! let repository = StaticProductRepository::new();
//! let service = ProductServiceImpl::new(repository);
//!
//! // Mount under /api/v1/products in the application router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Product, SellerQuery};
pub use repository::{ProductRepository, StaticProductRepository};
pub use service::{ProductService, ProductServiceImpl};
