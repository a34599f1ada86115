//! A product bought in some quantity, with its tax worked out up front.

use crate::error::CoreResult;
use crate::money::Money;
use crate::product::Product;
use crate::tax::TaxCalculator;
use crate::validation::validate_quantity;

/// A basket line.
///
/// ## Invariants
/// - `quantity >= 1`
/// - `shelf_price = price × quantity`
/// - `total_price = shelf_price + tax`
///
/// All amounts are computed in [`Item::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    product: Product,
    quantity: i64,
    shelf_price: Money,
    tax: Money,
    total_price: Money,
}

impl Item {
    /// Creates a line item, computing its tax with `calculator`.
    ///
    /// ## Errors
    /// - `InvalidArgument` when `quantity` is below 1
    /// - `MoneyError::Overflow` when the line total does not fit in `i64` cents
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::basket::Item;
    /// use salestax_core::product::{Category, Product};
    /// use salestax_core::tax::TaxCalculator;
    ///
    /// let cd = Product::from_amount("music CD", "14.99", false, Category::General).unwrap();
    /// let item = Item::new(cd, 1, &TaxCalculator::new()).unwrap();
    /// assert_eq!(item.tax().format(), "1.50");
    /// assert_eq!(item.total_price().format(), "16.49");
    /// ```
    pub fn new(product: Product, quantity: i64, calculator: &TaxCalculator) -> CoreResult<Self> {
        validate_quantity(quantity)?;

        let shelf_price = product.price().checked_multiply(quantity)?;
        let tax = calculator.calculate_for_product(&product, quantity)?;
        let total_price = shelf_price.checked_add(tax)?;

        Ok(Item {
            product,
            quantity,
            shelf_price,
            tax,
            total_price,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price before tax for the whole line.
    pub fn shelf_price(&self) -> Money {
        self.shelf_price
    }

    /// Tax for the whole line.
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Shelf price plus tax.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn display_name(&self) -> String {
        self.product.display_name()
    }
}
