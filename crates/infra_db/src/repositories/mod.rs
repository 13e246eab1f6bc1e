//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each aggregate. Repositories encapsulate SQL queries
//! and map rows to typed structs with explicit per-entity conversions.
//!
//! Statements that must join a caller-owned transaction — the checkout unit
//! of work spans product resolution, stock decrements, and sale inserts —
//! are associated functions over `&mut PgConnection`. Everything else runs
//! against the repository's pool.

pub mod category;
pub mod inventory;
pub mod product;
pub mod report;
pub mod sale;
pub mod user;

pub use category::CategoryRepository;
pub use inventory::InventoryRepository;
pub use product::ProductRepository;
pub use report::ReportRepository;
pub use sale::SaleRepository;
pub use user::UserRepository;
