//! # Tax Configuration
//!
//! Plain values describing which calculator to build.
//!
//! ## Configuration Sources
//! This crate does no I/O, so it only defines the values and their defaults.
//! The receipt CLI layers environment variables on top (`SALESTAX_*`).
//!
//! ```text
//! TaxConfig::default()
//!   basic_rate_percent       = 10
//!   import_duty_rate_percent = 5
//!   rounding_increment_cents = 5
//!        │
//!        ▼
//! build_calculator() ──► TaxCalculator [BasicSalesTax(10), ImportDuty(5)], Rounder(5¢)
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::tax::rounder::DEFAULT_INCREMENT_CENTS;
use crate::tax::rules::{BASIC_SALES_TAX_PERCENT, IMPORT_DUTY_PERCENT};
use crate::tax::{BasicSalesTax, ImportDuty, Rounder, SharedTaxRule, TaxCalculator};
use crate::validation::{validate_rounding_increment, ValidationResult};

/// Rates and rounding for the standard rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxConfig {
    /// Basic sales tax rate in percent.
    pub basic_rate_percent: u32,

    /// Import duty rate in percent.
    pub import_duty_rate_percent: u32,

    /// Tax per unit is rounded up to a multiple of this many cents.
    pub rounding_increment_cents: i64,
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig {
            basic_rate_percent: BASIC_SALES_TAX_PERCENT,
            import_duty_rate_percent: IMPORT_DUTY_PERCENT,
            rounding_increment_cents: DEFAULT_INCREMENT_CENTS,
        }
    }
}

impl TaxConfig {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_rounding_increment(self.rounding_increment_cents)
    }

    /// Rules in evaluation order: basic sales tax, then import duty.
    pub fn rules(&self) -> Vec<SharedTaxRule> {
        vec![
            Arc::new(BasicSalesTax::with_rate(self.basic_rate_percent)),
            Arc::new(ImportDuty::with_rate(self.import_duty_rate_percent)),
        ]
    }

    /// Builds the calculator this config describes.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::config::TaxConfig;
    /// use salestax_core::product::{Category, Product};
    ///
    /// let calculator = TaxConfig::default().build_calculator().unwrap();
    /// let cd = Product::from_amount("music CD", "14.99", false, Category::General).unwrap();
    /// assert_eq!(calculator.calculate_for_product(&cd, 1).unwrap().format(), "1.50");
    /// ```
    pub fn build_calculator(&self) -> ValidationResult<TaxCalculator> {
        self.validate()?;
        let rounder = Rounder::with_increment_cents(self.rounding_increment_cents)?;

        Ok(TaxCalculator::new()
            .with_rules(self.rules())
            .with_rounder(rounder))
    }
}
