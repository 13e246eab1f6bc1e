//! Core Kernel - Foundational types for the POS system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with fixed-point decimal arithmetic (2 decimal places)
//! - Strongly-typed surrogate identifiers

pub mod identifiers;
pub mod money;

pub use identifiers::{CategoryId, InventoryId, ProductId, SaleId, SaleItemId, UserId};
pub use money::{Money, MoneyError};
