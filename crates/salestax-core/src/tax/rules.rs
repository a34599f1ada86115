//! Tax rules: a predicate deciding whether a product is taxed plus a whole
//! percentage rate.
//!
//! Rules are evaluated independently by the
//! [`TaxCalculator`](super::TaxCalculator) and their contributions summed;
//! one rule never sees another's result.

use std::fmt;
use std::sync::Arc;

use crate::error::MoneyError;
use crate::product::Product;

/// Rate of the basic sales tax, in percent.
pub const BASIC_SALES_TAX_PERCENT: u32 = 10;

/// Rate of the import duty, in percent.
pub const IMPORT_DUTY_PERCENT: u32 = 5;

/// A rule shared between calculators and basket snapshots.
pub type SharedTaxRule = Arc<dyn TaxRule + Send + Sync>;

/// A single tax applied per unit of a product.
///
/// Implementors provide [`is_applicable`](TaxRule::is_applicable) and
/// [`rate_percent`](TaxRule::rate_percent); the raw contribution is derived
/// from those two.
pub trait TaxRule: fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this rule taxes the product at all.
    fn is_applicable(&self, product: &Product) -> bool;

    /// Whole percentage rate, e.g. `10` for 10%.
    fn rate_percent(&self) -> u32;

    /// Raw tax for one unit, in centi-cents (hundredths of a cent).
    ///
    /// `price_cents × rate_percent` is the tax in hundredths of a cent, so no
    /// precision is lost before rounding. Returns 0 when the rule does not apply,
    /// and [`MoneyError::Overflow`] when the product does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    /// use salestax_core::product::{Category, Product};
    /// use salestax_core::tax::{BasicSalesTax, TaxRule};
    ///
    /// let perfume =
    ///     Product::new("perfume", Money::from_cents(1125), false, Category::General).unwrap();
    /// // 10% of 1125 cents = 112.50 cents = 11250 centi-cents
    /// assert_eq!(BasicSalesTax::default().unit_tax_centicents(&perfume), Ok(11250));
    /// ```
    fn unit_tax_centicents(&self, product: &Product) -> Result<i64, MoneyError> {
        if !self.is_applicable(product) {
            return Ok(0);
        }
        product
            .price()
            .cents()
            .checked_mul(i64::from(self.rate_percent()))
            .ok_or_else(|| MoneyError::overflow(self.name()))
    }
}

// =============================================================================
// Basic Sales Tax
// =============================================================================

/// Basic sales tax: applies to everything except books, food and medical
/// products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicSalesTax {
    rate_percent: u32,
}

impl BasicSalesTax {
    pub const fn with_rate(rate_percent: u32) -> Self {
        BasicSalesTax { rate_percent }
    }
}

impl Default for BasicSalesTax {
    fn default() -> Self {
        BasicSalesTax::with_rate(BASIC_SALES_TAX_PERCENT)
    }
}

impl TaxRule for BasicSalesTax {
    fn name(&self) -> &'static str {
        "basic_sales_tax"
    }

    fn is_applicable(&self, product: &Product) -> bool {
        !product.is_tax_exempt()
    }

    fn rate_percent(&self) -> u32 {
        self.rate_percent
    }
}

// =============================================================================
// Import Duty
// =============================================================================

/// Import duty: applies to every imported product, exempt categories included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportDuty {
    rate_percent: u32,
}

impl ImportDuty {
    pub const fn with_rate(rate_percent: u32) -> Self {
        ImportDuty { rate_percent }
    }
}

impl Default for ImportDuty {
    fn default() -> Self {
        ImportDuty::with_rate(IMPORT_DUTY_PERCENT)
    }
}

impl TaxRule for ImportDuty {
    fn name(&self) -> &'static str {
        "import_duty"
    }

    fn is_applicable(&self, product: &Product) -> bool {
        product.is_imported()
    }

    fn rate_percent(&self) -> u32 {
        self.rate_percent
    }
}

/// The standard rule set: basic sales tax, then import duty.
pub fn default_rules() -> Vec<SharedTaxRule> {
    vec![
        Arc::new(BasicSalesTax::default()),
        Arc::new(ImportDuty::default()),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
