//! Request handlers, one module per resource

pub mod auth;
pub mod categories;
pub mod health;
pub mod inventory;
pub mod products;
pub mod reports;
pub mod sales;
