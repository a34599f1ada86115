//! # Validation Module
//!
//! Argument checks shared by the constructors in this crate.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: ItemParser                                                   │
//! │  └── Line grammar (InvalidFormat)                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Money::from_amount                                           │
//! │  └── Decimal text, sign (NegativeAmount)                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Product / Item / TaxConfig constructors                      │
//! │  └── THIS MODULE: name, price, quantity, increment (InvalidArgument)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("music CD").unwrap();
//! validate_quantity(3).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::tax::CENTICENTS_PER_CENT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (>= 1)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Basket: Add Item                                                       │
/// │                                                                         │
/// │  "0 book at 12.49" parses fine ─► basket.add(book, 0)                  │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(0) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       └── OK → Item computes tax and totals                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a shelf price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use salestax_core::money::Money;
/// use salestax_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Largest rounding increment, in cents, whose centi-cent value fits in an `i64`.
pub const MAX_ROUNDING_INCREMENT_CENTS: i64 = i64::MAX / CENTICENTS_PER_CENT;

/// Validates a rounding increment in cents.
///
/// ## Rules
/// - Must be positive; a zero increment has no multiples to round up to
/// - Must be at most [`MAX_ROUNDING_INCREMENT_CENTS`]
pub fn validate_rounding_increment(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "rounding increment".to_string(),
        });
    }
    if cents > MAX_ROUNDING_INCREMENT_CENTS {
        return Err(ValidationError::TooLarge {
            field: "rounding increment".to_string(),
            max: MAX_ROUNDING_INCREMENT_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("bottle of perfume").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(-1)),
            Err(ValidationError::MustNotBeNegative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rounding_increment() {
        assert!(validate_rounding_increment(5).is_ok());
        assert!(validate_rounding_increment(1).is_ok());
        assert!(validate_rounding_increment(0).is_err());
        assert!(validate_rounding_increment(-5).is_err());
    }

    #[test]
    fn test_validate_rounding_increment_upper_bound() {
        assert!(validate_rounding_increment(MAX_ROUNDING_INCREMENT_CENTS).is_ok());
        assert_eq!(
            validate_rounding_increment(92_233_720_368_547_759),
            Err(ValidationError::TooLarge {
                field: "rounding increment".to_string(),
                max: MAX_ROUNDING_INCREMENT_CENTS,
            })
        );
    }
}
