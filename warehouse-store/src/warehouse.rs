use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use warehouse_catalog::{Category, Product};

#[derive(Debug, thiserror::Error)]
pub enum WarehouseError {
    #[error("Invalid product: {0}")]
    InvalidArgument(String),

    #[error("Product not found: {0}")]
    NotFound(String),
}

/// The authoritative in-memory product collection.
///
/// Every operation takes the single mutex for its full duration, reads
/// included, so operations never interleave: each one is atomic relative to
/// every other. The live `Vec` is never handed out; reads return owned
/// clones.
#[derive(Debug, Default)]
pub struct Warehouse {
    products: Mutex<Vec<Product>>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product to the store.
    ///
    /// Fails with `InvalidArgument` on an empty name and leaves the store
    /// unchanged. Duplicate ids are not checked; callers are expected to
    /// supply unique ids.
    pub fn add_product(&self, product: Product) -> Result<(), WarehouseError> {
        if product.name.is_empty() {
            return Err(WarehouseError::InvalidArgument(
                "product name cannot be empty".to_string(),
            ));
        }

        let mut products = self.lock();
        products.push(product);
        tracing::debug!(total = products.len(), "product added");
        Ok(())
    }

    /// Replace the product with `id` in place, keeping its `created_date`
    /// and position, and return the new value.
    pub fn update_product(
        &self,
        id: &str,
        name: &str,
        category: Category,
        quantity: u32,
    ) -> Result<Product, WarehouseError> {
        if name.is_empty() {
            return Err(WarehouseError::InvalidArgument(
                "product name cannot be empty".to_string(),
            ));
        }

        let mut products = self.lock();
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| WarehouseError::NotFound(id.to_string()))?;

        let updated = slot
            .clone()
            .with_name(name)
            .with_category(category)
            .with_quantity(quantity);
        *slot = updated.clone();
        tracing::debug!(%id, "product updated");
        Ok(updated)
    }

    /// Snapshot of the whole store, in insertion order.
    pub fn all_products(&self) -> Vec<Product> {
        self.lock().clone()
    }

    /// Soft not-found: absent ids yield `None`, not an error.
    pub fn product_by_id(&self, id: &str) -> Option<Product> {
        self.lock().iter().find(|p| p.id == id).cloned()
    }

    /// Products in `category`, sorted ascending by name (case-sensitive).
    pub fn products_by_category(&self, category: Category) -> Vec<Product> {
        let mut matches: Vec<Product> = self
            .lock()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }

    /// Products created strictly after `date`, in store order.
    pub fn products_created_after(&self, date: NaiveDate) -> Vec<Product> {
        self.lock()
            .iter()
            .filter(|p| p.created_date > date)
            .cloned()
            .collect()
    }

    /// Products modified strictly after `date`, in store order.
    pub fn products_modified_after(&self, date: NaiveDate) -> Vec<Product> {
        self.lock()
            .iter()
            .filter(|p| p.modified_date > date)
            .cloned()
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        // No operation panics while holding the guard, so poisoning only
        // occurs if this invariant is broken.
        self.products.lock().expect("warehouse mutex poisoned")
    }
}
