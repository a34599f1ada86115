//! Plain-text receipt for a basket.
//!
//! ```text
//! 1 book: 12.49
//! 1 music CD: 16.49
//! Sales Taxes: 1.50
//! Total: 28.98
//! ```

use serde::Serialize;
use std::fmt;

use super::item::Item;
use super::shopping_basket::ShoppingBasket;
use crate::money::Money;

/// A formatting view over a basket. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    basket: &'a ShoppingBasket,
}

impl<'a> Receipt<'a> {
    pub fn new(basket: &'a ShoppingBasket) -> Self {
        Receipt { basket }
    }

    /// Receipt lines: one per item, then sales taxes and total.
    pub fn lines(&self) -> Vec<String> {
        self.basket
            .each_with_tax()
            .map(|(item, _tax, price_with_tax)| format_line_item(item, price_with_tax))
            .chain([
                format!("Sales Taxes: {}", self.basket.total_tax()),
                format!("Total: {}", self.basket.total_price()),
            ])
            .collect()
    }

    /// Structured form of the receipt, for JSON output.
    pub fn summary(&self) -> ReceiptSummary {
        ReceiptSummary {
            items: self
                .basket
                .each_with_tax()
                .map(|(item, _tax, price_with_tax)| ReceiptLine {
                    quantity: item.quantity(),
                    name: item.display_name(),
                    price: price_with_tax.format(),
                })
                .collect(),
            sales_taxes: self.basket.total_tax().format(),
            total: self.basket.total_price().format(),
        }
    }
}

fn format_line_item(item: &Item, price: Money) -> String {
    format!("{} {}: {}", item.quantity(), item.display_name(), price)
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Receipt totals as formatted amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub items: Vec<ReceiptLine>,
    pub sales_taxes: String,
    pub total: String,
}

/// One item line: quantity, display name and price including tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub quantity: i64,
    pub name: String,
    pub price: String,
}
