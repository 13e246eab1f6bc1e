//! Category DTOs

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /categories`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Body of `PUT /categories/{id}`
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}
