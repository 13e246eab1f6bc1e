//! HTTP API Layer
//!
//! This crate provides the REST API for the POS back end using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Bearer authentication, admin gating, request logging
//! - **DTOs**: Request/response data transfer objects with validation
//! - **Error Handling**: Error kinds mapped to status codes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_catalog::{CategoryService, ProductService};
use domain_inventory::InventoryLedger;
use domain_sales::{CheckoutService, ReportService};
use infra_db::repositories::UserRepository;

use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, categories, health, inventory, products, reports, sales};
use crate::middleware::{auth_middleware, request_logging, require_admin};

/// Application state shared across handlers
///
/// Every service gets the pool handle at construction; there is no global
/// connection state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
    pub checkout: CheckoutService,
    pub reports: ReportService,
    pub inventory: InventoryLedger,
    pub products: ProductService,
    pub categories: CategoryService,
    pub users: UserRepository,
}

impl AppState {
    pub fn new(pool: PgPool, config: ApiConfig) -> Self {
        Self {
            checkout: CheckoutService::new(pool.clone()),
            reports: ReportService::new(pool.clone()),
            inventory: InventoryLedger::new(pool.clone()),
            products: ProductService::new(pool.clone()),
            categories: CategoryService::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState::new(pool, config);

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let auth_routes = Router::new().route("/login", post(auth_handlers::login));

    // Category routes; mutations are admin-only
    let category_routes = Router::new()
        .route("/", get(categories::list_categories))
        .merge(
            Router::new()
                .route("/", post(categories::create_category))
                .route("/:id", put(categories::update_category))
                .route("/:id", delete(categories::delete_category))
                .route_layer(axum_middleware::from_fn(require_admin)),
        );

    // Product routes; mutations are admin-only
    let product_routes = Router::new()
        .route("/", get(products::list_products))
        .route("/search", get(products::search_products))
        .route("/:id", get(products::get_product))
        .merge(
            Router::new()
                .route("/", post(products::create_product))
                .route("/:id", put(products::update_product))
                .route("/:id", delete(products::delete_product))
                .route_layer(axum_middleware::from_fn(require_admin)),
        );

    // Inventory routes; manual adjustment is admin-only
    let inventory_routes = Router::new()
        .route("/", get(inventory::list_inventory))
        .route("/:product_id", get(inventory::get_inventory))
        .merge(
            Router::new()
                .route("/adjust", post(inventory::adjust_inventory))
                .route_layer(axum_middleware::from_fn(require_admin)),
        );

    // Sales routes
    let sales_routes = Router::new()
        .route("/", post(sales::create_sale))
        .route("/", get(sales::list_sales))
        .route("/:id", get(sales::get_sale));

    // Report routes
    let report_routes = Router::new()
        .route("/sales", get(reports::sales_by_date))
        .route("/top-products", get(reports::top_products))
        .route("/stats", get(reports::sales_stats));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/categories", category_routes)
        .nest("/products", product_routes)
        .nest("/inventory", inventory_routes)
        .nest("/sales", sales_routes)
        .nest("/reports", report_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
