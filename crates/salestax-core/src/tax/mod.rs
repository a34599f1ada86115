//! # Tax Module
//!
//! Everything between a product's shelf price and the tax on its line.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tax for one line (qty × product)                     │
//! │                                                                         │
//! │  price_cents ──► BasicSalesTax (10%) ──┐                               │
//! │             └──► ImportDuty     (5%) ──┼─► Σ raw centi-cents (1 unit)  │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                             Rounder: up to next 500 centi-cents        │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                              ÷ 100 → cents per unit × quantity          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens once per unit, before the quantity is applied.

pub mod calculator;
pub mod rounder;
pub mod rules;

pub use calculator::TaxCalculator;
pub use rounder::Rounder;
pub use rules::{BasicSalesTax, ImportDuty, SharedTaxRule, TaxRule};

/// Centi-cents per cent. Rules produce centi-cents so a whole-percent rate
/// applied to whole cents is always exact.
pub const CENTICENTS_PER_CENT: i64 = 100;
