//! Inventory Domain - the stock ledger
//!
//! Owns per-product on-hand quantity. Every mutation - manual adjustments
//! through the HTTP endpoint and checkout decrements alike - funnels through
//! the one atomic conditional-update primitive in
//! `infra_db::repositories::inventory`, so the ">= 0" floor holds under any
//! interleaving of concurrent callers.

pub mod error;
pub mod ledger;

pub use error::InventoryError;
pub use ledger::{InventoryLedger, InventoryView};
