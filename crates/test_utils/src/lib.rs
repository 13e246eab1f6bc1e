//! Shared test utilities for the POS test suite
//!
//! - [`database`]: a testcontainers PostgreSQL harness that applies the
//!   real embedded migrations
//! - [`builders`]: fluent builders for checkout requests
//! - [`fixtures`]: seed helpers for users, products, and stock

pub mod builders;
pub mod database;
pub mod fixtures;

pub use builders::CheckoutRequestBuilder;
pub use database::{create_isolated_test_database, get_shared_test_database, TestDatabase};
