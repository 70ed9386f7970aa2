use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of product classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electronics,
    Food,
    Books,
}

impl Category {
    /// Human-readable name, used by `Display` and API responses.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Food => "Food",
            Category::Books => "Books",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Case-insensitive parse; anything outside the closed set is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("electronics") {
            Ok(Category::Electronics)
        } else if s.eq_ignore_ascii_case("food") {
            Ok(Category::Food)
        } else if s.eq_ignore_ascii_case("books") {
            Ok(Category::Books)
        } else {
            Err(CategoryError::Invalid(s.to_string()))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Invalid category: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ELECTRONICS".parse::<Category>().unwrap(), Category::Electronics);
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Books".parse::<Category>().unwrap(), Category::Books);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "toys".parse::<Category>().unwrap_err();
        assert!(matches!(err, CategoryError::Invalid(ref name) if name == "toys"));
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"ELECTRONICS\"");
    }
}
