//! OpenAPI documentation configuration

use axum_helpers::errors::responses::NotFoundResponse;
use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Lists the products of a seller",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/products", api = domain_products::ApiDoc)
    ),
    components(
        responses(NotFoundResponse)
    ),
    tags(
        (name = "Products", description = "Seller product listing")
    )
)]
pub struct ApiDoc;
