//! HTTP handlers for Products API

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
    ErrorResponse, Utf8Json,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, SellerQuery};
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(get_products),
    components(
        schemas(Product, ErrorResponse),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Seller product listing")
    )
)]
pub struct ApiDoc;

/// Create the products router
pub fn router<S: ProductService + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_products))
        .with_state(shared_service)
}

/// List the products of a seller
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(SellerQuery),
    responses(
        (status = 200, description = "Products of the seller", body = Vec<Product>,
            content_type = "application/json; charset=utf-8"),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<S: ProductService>(
    State(service): State<Arc<S>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ProductResult<Utf8Json<Vec<Product>>> {
    let Query(pairs) = pairs.map_err(|e| ProductError::InvalidQuery(e.body_text()))?;
    let query = SellerQuery::from_pairs(pairs);
    let seller_id = query.seller_id().ok_or(ProductError::MissingSellerId)?;
    let products = service.get_all_by_seller(seller_id).await?;
    Ok(Utf8Json(products))
}
