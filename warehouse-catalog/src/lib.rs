//! Product and Category value types for the warehouse.
//!
//! Pure domain logic: no IO, no locking. The store and the REST adapter
//! build on these types.

pub mod category;
pub mod product;

pub use category::{Category, CategoryError};
pub use product::Product;
