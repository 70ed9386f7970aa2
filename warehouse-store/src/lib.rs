//! In-memory, concurrency-safe store and query engine over products.

pub mod warehouse;

pub use warehouse::{Warehouse, WarehouseError};
