//! # Product Types
//!
//! Catalog entries that flow into a basket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │        │    Category     │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  name           │───────►│  Book     ┐     │                        │
//! │  │  price (Money)  │        │  Food     ├ exempt from basic tax        │
//! │  │  imported       │        │  Medical  ┘     │                        │
//! │  │  category       │        │  General        │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are validated once at construction and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name, ValidationResult};

// =============================================================================
// Category
// =============================================================================

/// Product category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Book,
    Food,
    Medical,
    General,
}

impl Category {
    /// Every category, in classification order.
    pub const ALL: [Category; 4] = [
        Category::Book,
        Category::Food,
        Category::Medical,
        Category::General,
    ];

    /// Lowercase name used in text and JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Book => "book",
            Category::Food => "food",
            Category::Medical => "medical",
            Category::General => "general",
        }
    }

    /// Books, food and medical products are exempt from basic sales tax.
    #[inline]
    pub const fn is_tax_exempt(&self) -> bool {
        matches!(self, Category::Book | Category::Food | Category::Medical)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses a category name, ignoring case.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::product::Category;
    ///
    /// assert_eq!("Book".parse::<Category>().unwrap(), Category::Book);
    /// assert!("toys".parse::<Category>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product with its shelf price, before tax.
///
/// Only `Serialize` is derived: every product goes through [`Product::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    price: Money,
    imported: bool,
    category: Category,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Errors
    /// [`ValidationError::Required`] for an empty name and
    /// [`ValidationError::MustNotBeNegative`] for a negative price.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    /// use salestax_core::product::{Category, Product};
    ///
    /// let price = Money::from_cents(2799);
    /// let perfume = Product::new("bottle of perfume", price, true, Category::General).unwrap();
    /// assert_eq!(perfume.display_name(), "imported bottle of perfume");
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        imported: bool,
        category: Category,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            name,
            price,
            imported,
            category,
        })
    }

    /// Creates a product from a decimal price string such as `"12.49"`.
    pub fn from_amount(
        name: impl Into<String>,
        amount: &str,
        imported: bool,
        category: Category,
    ) -> CoreResult<Self> {
        let price = Money::from_amount(amount)?;
        Ok(Product::new(name, price, imported, category)?)
    }

    /// Product name without the "imported" prefix.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shelf price of one unit.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn is_imported(&self) -> bool {
        self.imported
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether basic sales tax is waived for this product's category.
    #[inline]
    pub fn is_tax_exempt(&self) -> bool {
        self.category.is_tax_exempt()
    }

    /// Name as printed on a receipt, with an "imported " prefix when imported.
    pub fn display_name(&self) -> String {
        if self.imported {
            format!("imported {}", self.name)
        } else {
            self.name.clone()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_category_exemptions() {
        assert!(Category::Book.is_tax_exempt());
        assert!(Category::Food.is_tax_exempt());
        assert!(Category::Medical.is_tax_exempt());
        assert!(!Category::General.is_tax_exempt());
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("medical".parse::<Category>().unwrap(), Category::Medical);
        assert_eq!(" FOOD ".parse::<Category>().unwrap(), Category::Food);

        let err = "toys".parse::<Category>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"category must be one of: ["book", "food", "medical", "general"]"#
        );
    }

    #[test]
    fn test_product_accessors() {
        let book = Product::new("book", Money::from_cents(1249), false, Category::Book).unwrap();
        assert_eq!(book.name(), "book");
        assert_eq!(book.price().cents(), 1249);
        assert!(!book.is_imported());
        assert!(book.is_tax_exempt());
        assert_eq!(book.display_name(), "book");
    }

    #[test]
    fn test_imported_display_name() {
        let chocolates =
            Product::from_amount("box of chocolates", "10.00", true, Category::Food).unwrap();
        assert_eq!(chocolates.display_name(), "imported box of chocolates");
        assert!(chocolates.is_tax_exempt());
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = Product::new("  ", Money::zero(), false, Category::General).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_rejects_negative_price() {
        let err =
            Product::new("refund", Money::from_cents(-1), false, Category::General).unwrap_err();
        assert!(matches!(err, ValidationError::MustNotBeNegative { .. }));

        let err = Product::from_amount("refund", "-1.00", false, Category::General).unwrap_err();
        assert!(matches!(err, CoreError::Money(_)));
    }

    #[test]
    fn test_zero_price_is_allowed() {
        assert!(Product::new("free item", Money::zero(), false, Category::General).is_ok());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Medical).unwrap(), r#""medical""#);
    }

    #[test]
    fn test_product_serializes_with_price_in_cents() {
        let pills =
            Product::from_amount("packet of headache pills", "9.75", false, Category::Medical)
                .unwrap();

        assert_eq!(
            serde_json::to_value(&pills).unwrap(),
            serde_json::json!({
                "name": "packet of headache pills",
                "price": 975,
                "imported": false,
                "category": "medical"
            })
        );
    }
}
