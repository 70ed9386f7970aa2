use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Immutable inventory record, keyed by `id`.
///
/// Mutation goes through the `with_*` copies: each returns a new value with
/// `modified_date` stamped to today and everything else carried over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub created_date: NaiveDate,
    pub modified_date: NaiveDate,
}

impl Product {
    /// Build a product with both dates stamped to today.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        quantity: u32,
    ) -> Self {
        let today = today();
        Self {
            id: id.into(),
            name: name.into(),
            category,
            quantity,
            created_date: today,
            modified_date: today,
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modified_date: today(),
            ..self
        }
    }

    pub fn with_category(self, category: Category) -> Self {
        Self {
            category,
            modified_date: today(),
            ..self
        }
    }

    pub fn with_quantity(self, quantity: u32) -> Self {
        Self {
            quantity,
            modified_date: today(),
            ..self
        }
    }
}

/// Store-membership equality is by `id` alone.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl std::hash::Hash for Product {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_copies_preserve_id_and_created_date() {
        let product = Product::new("p-1", "Keyboard", Category::Electronics, 4);
        let created = product.created_date;

        let updated = product
            .with_name("Mechanical Keyboard")
            .with_category(Category::Books)
            .with_quantity(7);

        assert_eq!(updated.id, "p-1");
        assert_eq!(updated.created_date, created);
        assert_eq!(updated.name, "Mechanical Keyboard");
        assert_eq!(updated.category, Category::Books);
        assert_eq!(updated.quantity, 7);
        assert!(updated.modified_date >= updated.created_date);
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let a = Product::new("same", "A", Category::Food, 1);
        let b = Product::new("same", "B", Category::Books, 99);
        assert_eq!(a, b);

        let c = Product::new("other", "A", Category::Food, 1);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serializes_camel_case_dates() {
        let product = Product::new("p-2", "Rice", Category::Food, 10);
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("createdDate").is_some());
        assert!(json.get("modifiedDate").is_some());
        assert_eq!(json["category"], "FOOD");
    }
}
