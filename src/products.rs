//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Stable, totally ordered product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product category, if any
    pub category: Option<String>,

    /// Unit price
    pub price: Money<'static, Currency>,
}

impl Product {
    /// Creates an uncategorised product with an empty description.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money<'static, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: None,
            price,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the category when it is present and non-empty.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }

    /// Returns true when the product's category is exactly `category`.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use super::*;

    #[test]
    fn product_ids_order_numerically() {
        let mut ids = vec![ProductId::new(10), ProductId::new(2), ProductId::new(7)];

        ids.sort();

        assert_eq!(ids, [ProductId::new(2), ProductId::new(7), ProductId::new(10)]);
    }

    #[test]
    fn empty_category_is_treated_as_absent() {
        let product = Product::new(1, "Kayak", Money::from_minor(27_500, GBP)).with_category("");

        assert_eq!(product.category(), None);
        assert!(product.in_category(""));
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let product =
            Product::new(1, "Kayak", Money::from_minor(27_500, GBP)).with_category("Watersports");

        assert!(product.in_category("Watersports"));
        assert!(!product.in_category("watersports"));
    }

    #[test]
    fn builder_sets_description_and_category() {
        let product = Product::new(3, "Soccer Ball", Money::from_minor(1_950, GBP))
            .with_description("FIFA-approved size and weight")
            .with_category("Soccer");

        assert_eq!(product.id.get(), 3);
        assert_eq!(product.description, "FIFA-approved size and weight");
        assert_eq!(product.category(), Some("Soccer"));
    }
}
