//! Catalog Domain - products and categories
//!
//! The product directory is what checkout resolves line items against; the
//! services here are otherwise routine single-row reads and writes with
//! existence validation. Each service is constructed with an explicit pool
//! handle - there is no shared global state.

pub mod category;
pub mod error;
pub mod product;

pub use category::{CategoryService, CategoryView};
pub use error::CatalogError;
pub use product::{NewProductInput, ProductService, ProductView, UpdateProductInput};
