//! # salestax-core: Pure Business Logic for Sales Tax Receipts
//!
//! This crate computes sales tax for a basket of products and renders the
//! receipt. It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Salestax Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-cli (`salestax`)                     │   │
//! │  │    stdin / file ──► parse ──► basket ──► receipt ──► stdout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ salestax-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌────────────┐  ┌────────────┐   │   │
//! │  │   │  parser  │  │ product  │  │    tax     │  │   basket   │   │   │
//! │  │   │ ItemPar- │  │ Product  │  │ TaxRule    │  │ Item       │   │   │
//! │  │   │ ser      │  │ Category │  │ Rounder    │  │ Basket     │   │   │
//! │  │   │          │  │          │  │ Calculator │  │ Receipt    │   │   │
//! │  │   └──────────┘  └──────────┘  └────────────┘  └────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENV • PURE FUNCTIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product and Category
//! - [`tax`] - Tax rules, rounding and the tax calculator
//! - [`basket`] - Items, the immutable shopping basket and the receipt
//! - [`parser`] - `<quantity> <name> at <price>` line parser
//! - [`config`] - Tax rates and rounding increment
//! - [`error`] - Domain error types
//! - [`validation`] - Argument validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output
//! 2. **Integer Money**: cents for amounts, centi-cents for tax intermediates
//! 3. **Immutable Values**: adding to a basket returns a new basket
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use salestax_core::{ItemParser, Receipt, ShoppingBasket, TaxCalculator};
//!
//! let input = "1 imported box of chocolates at 10.00\n1 imported bottle of perfume at 47.50";
//! let parsed = ItemParser::new().parse_all(input).unwrap();
//! let basket = ShoppingBasket::from_parsed(TaxCalculator::new(), parsed).unwrap();
//!
//! assert_eq!(
//!     Receipt::new(&basket).to_string(),
//!     "1 imported box of chocolates: 10.50\n\
//!      1 imported bottle of perfume: 54.65\n\
//!      Sales Taxes: 7.65\n\
//!      Total: 65.15"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod config;
pub mod error;
pub mod money;
pub mod parser;
pub mod product;
pub mod tax;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Item, Receipt, ReceiptSummary, ShoppingBasket};
pub use config::TaxConfig;
pub use error::{CoreError, CoreResult, MoneyError, ValidationError};
pub use money::Money;
pub use parser::{ItemParser, ParsedItem};
pub use product::{Category, Product};
pub use tax::{BasicSalesTax, ImportDuty, Rounder, TaxCalculator, TaxRule};
