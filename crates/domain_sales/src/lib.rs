//! Sales Domain - checkout and reporting
//!
//! The checkout orchestrator is the one subsystem in this code base with
//! real invariants: payment must cover the total before anything happens,
//! stock is decremented through an atomic conditional update, and the sale
//! header plus its line items are persisted in the same transaction as the
//! decrements. Either everything lands or nothing does.

pub mod checkout;
pub mod error;
pub mod invoice;
pub mod receipt;
pub mod reports;

pub use checkout::{compute_total, validate_request, CheckoutLine, CheckoutRequest, CheckoutService};
pub use error::CheckoutError;
pub use invoice::generate_invoice_no;
pub use receipt::{ReceiptItem, SaleReceipt};
pub use reports::{DailySales, ReportService, SalesStats, TopProduct};
