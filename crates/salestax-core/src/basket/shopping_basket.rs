//! # Shopping Basket
//!
//! An immutable, append-only list of [`Item`]s.
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Snapshots                                     │
//! │                                                                         │
//! │  empty ──add(book, 1)──► b1 ──add(cd, 1)──► b2                          │
//! │   []                     [book]             [book, cd]                  │
//! │                                                                         │
//! │  `add` never touches the receiver: `empty` and `b1` stay valid and      │
//! │  unchanged after `b2` exists, so snapshots can be shared freely.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are kept alongside the items and extended with checked arithmetic
//! on every `add`, so a basket whose totals would leave `i64` cents is never
//! built.

use tracing::debug;

use super::item::Item;
use crate::error::CoreResult;
use crate::money::Money;
use crate::parser::ParsedItem;
use crate::product::Product;
use crate::tax::TaxCalculator;

/// A basket of line items sharing one tax calculator.
#[derive(Debug, Clone, Default)]
pub struct ShoppingBasket {
    items: Vec<Item>,
    calculator: TaxCalculator,
    subtotal: Money,
    total_tax: Money,
    total_price: Money,
}

impl ShoppingBasket {
    /// Empty basket with the standard tax rules.
    pub fn new() -> Self {
        ShoppingBasket::default()
    }

    /// Empty basket taxing with `calculator`.
    pub fn with_calculator(calculator: TaxCalculator) -> Self {
        ShoppingBasket {
            items: Vec::new(),
            calculator,
            subtotal: Money::zero(),
            total_tax: Money::zero(),
            total_price: Money::zero(),
        }
    }

    /// Builds a basket from parsed lines, in order.
    ///
    /// Fails on the first line whose quantity is rejected.
    pub fn from_parsed<I>(calculator: TaxCalculator, parsed: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = ParsedItem>,
    {
        parsed
            .into_iter()
            .try_fold(ShoppingBasket::with_calculator(calculator), |basket, item| {
                basket.add_parsed(item)
            })
    }

    /// Returns a new basket with `quantity` of `product` appended.
    ///
    /// Fails with `InvalidArgument` for a quantity below 1, and with
    /// `MoneyError::Overflow` when the item or the basket totals would not
    /// fit in `i64` cents. The receiver is unchanged either way.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::basket::ShoppingBasket;
    /// use salestax_core::product::{Category, Product};
    ///
    /// let book = Product::from_amount("book", "12.49", false, Category::Book).unwrap();
    /// let cd = Product::from_amount("music CD", "14.99", false, Category::General).unwrap();
    ///
    /// let empty = ShoppingBasket::new();
    /// let basket = empty.add(book, 1).unwrap().add(cd, 1).unwrap();
    ///
    /// assert!(empty.is_empty());
    /// assert_eq!(basket.total_tax().format(), "1.50");
    /// assert_eq!(basket.total_price().format(), "28.98");
    /// ```
    pub fn add(&self, product: Product, quantity: i64) -> CoreResult<Self> {
        let item = Item::new(product, quantity, &self.calculator)?;
        let subtotal = self.subtotal.checked_add(item.shelf_price())?;
        let total_tax = self.total_tax.checked_add(item.tax())?;
        let total_price = self.total_price.checked_add(item.total_price())?;
        debug!(
            product = item.product().name(),
            quantity,
            tax = %item.tax(),
            total = %item.total_price(),
            "Item added to basket"
        );

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);

        Ok(ShoppingBasket {
            items,
            calculator: self.calculator.clone(),
            subtotal,
            total_tax,
            total_price,
        })
    }

    /// [`add`](Self::add) with a quantity of one.
    pub fn add_one(&self, product: Product) -> CoreResult<Self> {
        self.add(product, 1)
    }

    pub fn add_parsed(&self, parsed: ParsedItem) -> CoreResult<Self> {
        self.add(parsed.product, parsed.quantity)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn calculator(&self) -> &TaxCalculator {
        &self.calculator
    }

    /// Sum of shelf prices, before tax.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Sum of every item's tax.
    pub fn total_tax(&self) -> Money {
        self.total_tax
    }

    /// Sum of every item's price including tax.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// `(item, tax, total_price)` for each item, in insertion order.
    ///
    /// Each call starts a fresh pass over the items.
    pub fn each_with_tax(&self) -> impl Iterator<Item = (&Item, Money, Money)> + '_ {
        self.items
            .iter()
            .map(|item| (item, item.tax(), item.total_price()))
    }
}
