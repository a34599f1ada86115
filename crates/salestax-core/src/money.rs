//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 10% tax on $14.99 as f64 is 1.4990000000000001,                     │
//! │  which is enough to push a "round up to 5 cents" rule over the edge.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices are cents, tax intermediates are centi-cents,                │
//! │    every step is exact integer math.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::money::Money;
//!
//! // Create from text input (validated, never negative)
//! let price = Money::from_amount("12.49").unwrap();
//! assert_eq!(price.cents(), 1249);
//!
//! // Arithmetic operations (checked, never wraps)
//! let doubled = price.checked_multiply(2).unwrap();
//! let total = price.checked_add(Money::from_cents(150)).unwrap();
//! assert_eq!(doubled.format(), "24.98");
//! assert_eq!(total.format(), "13.99");
//! assert!(price.checked_multiply(i64::MAX).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MoneyError;

/// Cents per major currency unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: `from_cents` accepts any value; only decimal input
///   through [`Money::from_amount`] is checked for sign
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as cents**: `Money(1249)` is `1249` in JSON
/// - **Checked arithmetic only**: sums and products report
///   [`MoneyError::Overflow`] instead of wrapping
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──┬──► Item.shelf_price ──► Item.total_price ─┐          │
/// │                  │                                           │          │
/// │                  └──► TaxCalculator ──► Item.tax ────────────┤          │
/// │                                                              ▼          │
/// │                              ShoppingBasket.total_tax / total_price     │
/// │                                                              │          │
/// │                                             Receipt "28.98" ◄┘          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// The sign is not checked; this is the raw constructor used after
    /// arithmetic. Use [`Money::from_amount`] for external input.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal string such as `"12.49"`.
    ///
    /// ## Rules
    /// - Up to two fractional digits are taken exactly
    /// - Further digits round half-up (ties away from zero): `"0.125"` → 13 cents
    /// - Negative amounts fail with [`MoneyError::NegativeAmount`]
    /// - Anything that is not a plain decimal fails with [`MoneyError::InvalidAmount`]
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount("12.49").unwrap().cents(), 1249);
    /// assert_eq!(Money::from_amount("10").unwrap().cents(), 1000);
    /// assert!(Money::from_amount("-10.00").is_err());
    /// ```
    pub fn from_amount(amount: &str) -> Result<Self, MoneyError> {
        let trimmed = amount.trim();
        let invalid = |reason: &str| MoneyError::InvalidAmount {
            amount: amount.to_string(),
            reason: reason.to_string(),
        };

        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            Some(_) => (false, trimmed),
            None => return Err(invalid("empty")),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("no digits"));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("not a decimal number"));
        }

        if negative && whole.bytes().chain(fraction.bytes()).any(|b| b != b'0') {
            return Err(MoneyError::NegativeAmount {
                amount: amount.to_string(),
            });
        }

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("too large"))?
        };

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        whole_units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .map(Money)
            .ok_or_else(|| invalid("too large"))
    }

    /// Creates a Money value from a floating point amount.
    ///
    /// Converts with `(amount × 100).round()`, so ties go away from zero,
    /// matching [`Money::from_amount`].
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(12.49).unwrap().cents(), 1249);
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::InvalidAmount {
                amount: amount.to_string(),
                reason: "not a finite number".to_string(),
            });
        }
        if amount < 0.0 {
            return Err(MoneyError::NegativeAmount {
                amount: amount.to_string(),
            });
        }

        let cents = (amount * CENTS_PER_UNIT as f64).round();
        if cents >= i64::MAX as f64 {
            return Err(MoneyError::InvalidAmount {
                amount: amount.to_string(),
                reason: "too large".to_string(),
            });
        }
        Ok(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.cents(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let total = Money::from_cents(1249).checked_add(Money::from_cents(150)).unwrap();
    /// assert_eq!(total.cents(), 1399);
    /// assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_err());
    /// ```
    pub fn checked_add(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| MoneyError::overflow("addition"))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1249);
    /// assert_eq!(unit_price.checked_multiply(2).unwrap().cents(), 2498);
    /// ```
    pub fn checked_multiply(&self, quantity: i64) -> Result<Money, MoneyError> {
        self.0
            .checked_mul(quantity)
            .map(Money)
            .ok_or_else(|| MoneyError::overflow("multiplication"))
    }

    /// Sums amounts, failing on the first overflow.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let amounts = [Money::from_cents(150), Money::from_cents(50)];
    /// assert_eq!(Money::checked_sum(amounts).unwrap().cents(), 200);
    /// ```
    pub fn checked_sum<I>(amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }

    /// Renders the amount as `<dollars>.<cents>`, e.g. `"12.49"`, `"0.05"`.
    ///
    /// No currency symbol and no thousands separators; this is exactly the
    /// text printed on a receipt.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_amount(s)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_cents_does_not_check_sign() {
        assert!(Money::from_cents(-550).is_negative());
    }

    #[test]
    fn test_from_amount() {
        assert_eq!(Money::from_amount("12.49").unwrap().cents(), 1249);
        assert_eq!(Money::from_amount("0.85").unwrap().cents(), 85);
        assert_eq!(Money::from_amount("10").unwrap().cents(), 1000);
        assert_eq!(Money::from_amount("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::from_amount(".05").unwrap().cents(), 5);
        assert_eq!(Money::from_amount(" 1.00 ").unwrap().cents(), 100);
        assert_eq!(Money::from_amount("0").unwrap().cents(), 0);
    }

    #[test]
    fn test_from_amount_rounds_half_up() {
        assert_eq!(Money::from_amount("0.125").unwrap().cents(), 13);
        assert_eq!(Money::from_amount("0.135").unwrap().cents(), 14);
        assert_eq!(Money::from_amount("0.1249").unwrap().cents(), 12);
        assert_eq!(Money::from_amount("9.999").unwrap().cents(), 1000);
    }

    #[test]
    fn test_from_amount_rejects_negative() {
        assert_eq!(
            Money::from_amount("-10.00"),
            Err(MoneyError::NegativeAmount {
                amount: "-10.00".to_string()
            })
        );
        assert!(matches!(
            Money::from_amount("-0.001"),
            Err(MoneyError::NegativeAmount { .. })
        ));
        // Negative zero is still zero.
        assert_eq!(Money::from_amount("-0.00").unwrap(), Money::zero());
    }

    #[test]
    fn test_from_amount_rejects_garbage() {
        for input in ["", "abc", "1.2.3", "12,49", ".", "-", "1e3"] {
            assert!(
                matches!(Money::from_amount(input), Err(MoneyError::InvalidAmount { .. })),
                "{input:?} should be rejected"
            );
        }
        assert!(Money::from_amount("99999999999999999999").is_err());
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(12.49).unwrap().cents(), 1249);
        assert_eq!(Money::from_decimal(0.0).unwrap().cents(), 0);
        assert!(matches!(
            Money::from_decimal(-10.0),
            Err(MoneyError::NegativeAmount { .. })
        ));
        assert!(Money::from_decimal(f64::NAN).is_err());
    }

    #[test]
    fn test_parse_via_from_str() {
        let money: Money = "27.99".parse().unwrap();
        assert_eq!(money.cents(), 2799);
    }

    #[test]
    fn test_format() {
        assert_eq!(Money::from_cents(1249).format(), "12.49");
        assert_eq!(Money::from_cents(5).format(), "0.05");
        assert_eq!(Money::from_cents(0).format(), "0.00");
        assert_eq!(Money::from_cents(100000).format(), "1000.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1249);
        let b = Money::from_cents(1499);

        assert_eq!(a.checked_add(b).unwrap().cents(), 2748);
        assert_eq!(a.checked_multiply(3).unwrap().cents(), 3747);
    }

    #[test]
    fn test_arithmetic_overflow_is_an_error() {
        let max = Money::from_cents(i64::MAX);

        assert_eq!(
            max.checked_add(Money::from_cents(1)),
            Err(MoneyError::overflow("addition"))
        );
        assert_eq!(
            Money::from_cents(1499).checked_multiply(i64::MAX),
            Err(MoneyError::overflow("multiplication"))
        );
        assert!(Money::checked_sum([max, max]).is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(150),
            Money::from_cents(0),
            Money::from_cents(50),
        ];
        assert_eq!(Money::checked_sum(amounts).unwrap().cents(), 200);
        assert_eq!(Money::checked_sum(Vec::new()).unwrap(), Money::zero());
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(1249)).unwrap();
        assert_eq!(json, "1249");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cents(), 1249);
    }
}
