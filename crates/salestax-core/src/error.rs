//! # Error Types
//!
//! Domain-specific error types for salestax-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salestax-core errors (this file)                                      │
//! │  ├── CoreError        - Everything the library can fail with           │
//! │  ├── ValidationError  - Product / Item / config argument checks        │
//! │  └── MoneyError       - Decimal amount conversion failures             │
//! │                                                                         │
//! │  receipt-cli errors (separate crate)                                   │
//! │  └── CliError         - I/O, config and output failures                │
//! │                                                                         │
//! │  Flow: ValidationError / MoneyError → CoreError → CliError → stderr    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Kinds
//! | Kind              | Variant                         | Raised by             |
//! |-------------------|---------------------------------|-----------------------|
//! | invalid argument  | `CoreError::InvalidArgument`    | Product, Item, config |
//! | negative amount   | `MoneyError::NegativeAmount`    | `Money::from_amount`  |
//! | invalid format    | `CoreError::InvalidFormat`      | `ItemParser`          |
//! | overflow          | `MoneyError::Overflow`          | tax and basket totals |
//!
//! All errors are raised at the point of construction. Nothing is retried
//! and no default is ever substituted for invalid input.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the sales tax library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A constructor argument was rejected.
    ///
    /// ## When This Occurs
    /// - Empty product name, negative price, unknown category
    /// - Quantity below 1 when adding to a basket
    /// - Non-positive rounding increment in a tax config
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A decimal amount could not be turned into money.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// An item line did not match `<quantity> <name> at <price>`.
    ///
    /// ## User Workflow
    /// ```text
    /// "invalid input"
    ///      │
    ///      ▼
    /// ItemParser::parse
    ///      │
    ///      ▼
    /// InvalidFormat { line: "invalid input" }
    /// ```
    #[error("Invalid input format: {line}")]
    InvalidFormat { line: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Argument validation errors.
///
/// These errors occur when a value doesn't meet the domain requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is above the largest accepted value.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Money Error
// =============================================================================

/// Errors from converting decimal input into [`Money`](crate::Money).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// Decimal input was below zero.
    #[error("Amount must not be negative: {amount}")]
    NegativeAmount { amount: String },

    /// Decimal input was not a number.
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount { amount: String, reason: String },

    /// An amount left the range of whole cents that fit in an `i64`.
    #[error("Amount out of range in {operation}")]
    Overflow { operation: String },
}

impl MoneyError {
    pub(crate) fn overflow(operation: &str) -> Self {
        MoneyError::Overflow {
            operation: operation.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidFormat {
            line: "invalid input".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input format: invalid input");

        let err = MoneyError::NegativeAmount {
            amount: "-10.00".to_string(),
        };
        assert_eq!(err.to_string(), "Amount must not be negative: -10.00");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert_eq!(core_err.to_string(), "Invalid argument: name is required");
    }

    #[test]
    fn test_money_error_is_transparent() {
        let core_err: CoreError = MoneyError::NegativeAmount {
            amount: "-1".to_string(),
        }
        .into();
        assert_eq!(core_err.to_string(), "Amount must not be negative: -1");
    }

    #[test]
    fn test_overflow_message() {
        assert_eq!(
            MoneyError::overflow("line total").to_string(),
            "Amount out of range in line total"
        );
    }
}
