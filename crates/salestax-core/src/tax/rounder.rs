//! Rounds raw tax up to the next currency increment.

use super::CENTICENTS_PER_CENT;
use crate::error::MoneyError;
use crate::validation::{validate_rounding_increment, ValidationResult};

/// Default increment: 5 cents.
pub const DEFAULT_INCREMENT_CENTS: i64 = 5;

/// Rounds centi-cent amounts up to a multiple of a whole-cent increment.
///
/// ## Rule
/// Never down, and unchanged only when already a multiple:
/// ```text
///     0 ──►     0
///     1 ──►   500      (0.01 cent becomes 5 cents)
///   500 ──►   500
/// 11250 ──► 11500      (112.50 cents becomes 115 cents)
/// ```
///
/// The increment is given in cents, so every result divides evenly into cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounder {
    increment_centicents: i64,
}

impl Rounder {
    /// Creates a rounder for an increment in whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::tax::Rounder;
    ///
    /// let to_dime = Rounder::with_increment_cents(10).unwrap();
    /// assert_eq!(to_dime.round_up(501).unwrap(), 1000);
    /// assert!(Rounder::with_increment_cents(0).is_err());
    /// ```
    pub fn with_increment_cents(cents: i64) -> ValidationResult<Self> {
        // Bounded so the centi-cent increment below cannot overflow.
        validate_rounding_increment(cents)?;
        Ok(Rounder {
            increment_centicents: cents * CENTICENTS_PER_CENT,
        })
    }

    /// Increment in centi-cents (500 for the default rounder).
    #[inline]
    pub const fn increment_centicents(&self) -> i64 {
        self.increment_centicents
    }

    /// Rounds `centicents` up to the next multiple of the increment.
    ///
    /// Fails with [`MoneyError::Overflow`] when that multiple is past `i64::MAX`.
    pub fn round_up(&self, centicents: i64) -> Result<i64, MoneyError> {
        let remainder = centicents.rem_euclid(self.increment_centicents);
        if remainder == 0 {
            return Ok(centicents);
        }

        centicents
            .checked_add(self.increment_centicents - remainder)
            .ok_or_else(|| MoneyError::overflow("tax rounding"))
    }
}

impl Default for Rounder {
    fn default() -> Self {
        Rounder {
            increment_centicents: DEFAULT_INCREMENT_CENTS * CENTICENTS_PER_CENT,
        }
    }
}
