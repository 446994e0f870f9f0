//! # Validation Module
//!
//! Opt-in input validation for pricing values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller boundary (this module)                                 │
//! │  ├── validate_price / validate_tax_rate on raw input                    │
//! │  └── Reject before domain values are constructed                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculation (totals module)                                   │
//! │  └── Trusts its inputs, performs no checks                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricing_core::validation::{validate_price, validate_tax_rate};
//!
//! assert!(validate_price(10.99).is_ok());
//! assert!(validate_tax_rate(0.08).is_ok());
//! assert!(validate_tax_rate(1.5).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price value.
///
/// ## Rules
/// - Must be finite (no NaN, no infinities)
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use pricing_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate given as a fractional multiplier.
///
/// ## Rules
/// - Must be finite (no NaN, no infinities)
/// - Must be between 0 and 1 inclusive (0% to 100%)
pub fn validate_tax_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "tax_rate".to_string(),
        });
    }

    if !(0.0..=1.0).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0.0,
            max: 1.0,
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
    fn test_validate_price() {
        assert!(validate_price(10.99).is_ok());
        assert!(validate_price(0.0).is_ok());

        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(0.0).is_ok());
        assert!(validate_tax_rate(0.08).is_ok());
        assert!(validate_tax_rate(1.0).is_ok());

        assert!(validate_tax_rate(-0.01).is_err());
        assert!(validate_tax_rate(1.01).is_err());
        assert!(validate_tax_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_tax_rate_error_variants() {
        assert!(matches!(
            validate_tax_rate(2.0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_tax_rate(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }
}
