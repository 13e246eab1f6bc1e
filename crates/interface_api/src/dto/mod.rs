//! Request/response data transfer objects
//!
//! Requests deserialize here and carry `validator` rules for shape checks;
//! responses reuse the serializable domain views directly.

pub mod auth;
pub mod categories;
pub mod inventory;
pub mod products;
pub mod reports;
pub mod sales;
