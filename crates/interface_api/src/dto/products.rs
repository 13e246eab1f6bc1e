//! Product DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use core_kernel::{CategoryId, Money};
use domain_catalog::{NewProductInput, UpdateProductInput};

/// Body of `POST /products`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    pub sku: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: Decimal,
    pub cost_price: Option<Decimal>,
    pub unit: Option<String>,
    pub initial_stock: Option<i32>,
}

impl From<CreateProductRequest> for NewProductInput {
    fn from(request: CreateProductRequest) -> Self {
        NewProductInput {
            sku: request.sku,
            name: request.name,
            category_id: request.category_id,
            price: Money::new(request.price),
            cost_price: request.cost_price.map(Money::new),
            unit: request.unit,
            initial_stock: request.initial_stock,
        }
    }
}

/// Body of `PUT /products/{id}`
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub sku: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: Decimal,
    pub cost_price: Option<Decimal>,
    pub unit: Option<String>,
}

impl From<UpdateProductRequest> for UpdateProductInput {
    fn from(request: UpdateProductRequest) -> Self {
        UpdateProductInput {
            sku: request.sku,
            name: request.name,
            category_id: request.category_id,
            price: Money::new(request.price),
            cost_price: request.cost_price.map(Money::new),
            unit: request.unit,
        }
    }
}

/// Query parameters of `GET /products/search`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
