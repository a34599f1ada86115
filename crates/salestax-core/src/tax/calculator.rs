//! # Tax Calculator
//!
//! Applies every configured [`TaxRule`] to one unit of a product, rounds the
//! sum once, then scales by quantity.
//!
//! ## Why Per-Unit Rounding Matters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  3 × general item at $0.52 (10% basic sales tax)                        │
//! │                                                                         │
//! │  Per unit (THIS CALCULATOR):                                            │
//! │    52 × 10 = 520 centi-cents ──► 1000 ──► 10 cents × 3 = 30 cents  ✅   │
//! │                                                                         │
//! │  On the line total (naive):                                             │
//! │    156 × 10 = 1560 centi-cents ──► 2000 ──► 20 cents               ❌   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use super::rounder::Rounder;
use super::rules::{default_rules, SharedTaxRule};
use super::CENTICENTS_PER_CENT;
use crate::error::MoneyError;
use crate::money::Money;
use crate::product::Product;

/// Ordered tax rules plus the rounder that finishes them off.
///
/// Cloning is cheap; the rule list is shared.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    rules: Arc<[SharedTaxRule]>,
    rounder: Rounder,
}

impl TaxCalculator {
    /// Calculator with the standard rules (basic sales tax, import duty) and
    /// rounding up to 5 cents.
    pub fn new() -> Self {
        TaxCalculator {
            rules: default_rules().into(),
            rounder: Rounder::default(),
        }
    }

    /// Replaces the rule list. Order only fixes the evaluation order; the
    /// contributions are summed.
    pub fn with_rules(mut self, rules: Vec<SharedTaxRule>) -> Self {
        self.rules = rules.into();
        self
    }

    pub fn with_rounder(mut self, rounder: Rounder) -> Self {
        self.rounder = rounder;
        self
    }

    pub fn rules(&self) -> &[SharedTaxRule] {
        &self.rules
    }

    pub fn rounder(&self) -> Rounder {
        self.rounder
    }

    /// Unrounded tax for one unit, in centi-cents, summed over all rules.
    pub fn raw_unit_tax_centicents(&self, product: &Product) -> Result<i64, MoneyError> {
        self.rules.iter().try_fold(0i64, |total, rule| {
            let centicents = rule.unit_tax_centicents(product)?;
            trace!(
                rule = rule.name(),
                product = product.name(),
                centicents,
                "Tax rule evaluated"
            );
            total
                .checked_add(centicents)
                .ok_or_else(|| MoneyError::overflow("unit tax"))
        })
    }

    /// Tax for one unit after rounding.
    pub fn unit_tax(&self, product: &Product) -> Result<Money, MoneyError> {
        let raw = self.raw_unit_tax_centicents(product)?;
        let rounded = self.rounder.round_up(raw)?;
        debug_assert_eq!(rounded % CENTICENTS_PER_CENT, 0);

        debug!(
            product = product.name(),
            raw_centicents = raw,
            rounded_centicents = rounded,
            "Unit tax rounded"
        );
        Ok(Money::from_cents(rounded / CENTICENTS_PER_CENT))
    }

    /// Total tax for `quantity` units of `product`.
    ///
    /// ## Algorithm
    /// 1. Sum each rule's raw tax for ONE unit, in centi-cents
    /// 2. Round up with the [`Rounder`]
    /// 3. Convert to cents (exact, the increment is whole cents)
    /// 4. Multiply by quantity
    ///
    /// Every step is checked; a result past `i64::MAX` cents is
    /// [`MoneyError::Overflow`], never a wrapped total.
    ///
    /// `quantity` must be at least 1; [`Item`](crate::basket::Item) checks
    /// this before calling.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    /// use salestax_core::product::{Category, Product};
    /// use salestax_core::tax::TaxCalculator;
    ///
    /// let perfume =
    ///     Product::new("bottle of perfume", Money::from_cents(2799), true, Category::General)
    ///         .unwrap();
    /// // 2799 × 15 = 41985 centi-cents → 42000 → 4.20 per unit → 8.40
    /// let tax = TaxCalculator::new().calculate_for_product(&perfume, 2).unwrap();
    /// assert_eq!(tax.cents(), 840);
    /// ```
    pub fn calculate_for_product(
        &self,
        product: &Product,
        quantity: i64,
    ) -> Result<Money, MoneyError> {
        debug_assert!(quantity > 0, "quantity must be positive");
        self.unit_tax(product)?.checked_multiply(quantity)
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        TaxCalculator::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
