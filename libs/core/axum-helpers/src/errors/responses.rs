//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - missing or malformed input",
    content_type = "application/json; charset=utf-8",
    example = json!({
        "error": "seller_id query param is required"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json; charset=utf-8",
    example = json!({
        "error": "The requested resource was not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - the upstream error message is passed through",
    content_type = "application/json; charset=utf-8",
    example = json!({
        "error": "The ID is not valid"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
