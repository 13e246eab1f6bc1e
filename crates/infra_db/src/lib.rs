//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL infrastructure for the POS system,
//! implemented with SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each aggregate gets a repository
//! that encapsulates its SQL and maps rows to typed structs via explicit
//! conversions. Statements that must participate in a caller-owned
//! transaction (the checkout unit of work) are exposed as associated
//! functions taking `&mut PgConnection`; everything else runs against the
//! pool the repository was constructed with.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, repositories::SaleRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/pos")).await?;
//! let sales = SaleRepository::new(pool);
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use migrations::run_migrations;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
