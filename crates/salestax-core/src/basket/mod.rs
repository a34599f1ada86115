//! # Basket Module
//!
//! Line items, the immutable shopping basket and its receipt.
//!
//! ```text
//! Product + quantity ──► Item (tax frozen) ──► ShoppingBasket::add ──► new basket
//!                                                      │
//!                                                      ▼
//!                                                   Receipt
//! ```

pub mod item;
pub mod receipt;
pub mod shopping_basket;

pub use item::Item;
pub use receipt::{Receipt, ReceiptLine, ReceiptSummary};
pub use shopping_basket::ShoppingBasket;
