//! # Domain Types
//!
//! Core value types for pricing calculations.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pricing Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │     TaxRate     │   │ PriceCalculator │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  price (f64)    │   │  fraction (f64) │   │  tax_rate       │       │
//! │  │                 │   │  0.08 = 8%      │   │  (see totals)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// A purchasable unit exposing a price.
///
/// Prices are expected to be non-negative, but the type does not enforce
/// this. Use [`crate::validation::validate_price`] at input boundaries when
/// enforcement is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Price of the item.
    pub price: f64,
}

impl Item {
    /// Creates an item with the given price.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::Item;
    ///
    /// let item = Item::new(10.99);
    /// assert_eq!(item.price, 10.99);
    /// ```
    #[inline]
    pub const fn new(price: f64) -> Self {
        Item { price }
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented as a fractional multiplier.
///
/// ## Why a Fraction?
/// The total contract is `subtotal * (1 + rate)`, so the stored value is the
/// multiplier addend itself: 0.08 means 8%. A sane range is [0, 1], but the
/// type does not enforce it; see [`crate::validation::validate_tax_rate`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Creates a tax rate from a fractional multiplier.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::TaxRate;
    ///
    /// let rate = TaxRate::from_fraction(0.08); // 8%
    /// assert_eq!(rate.fraction(), 0.08);
    /// ```
    #[inline]
    pub const fn from_fraction(fraction: f64) -> Self {
        TaxRate(fraction)
    }

    /// Creates a tax rate from a percentage (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::TaxRate;
    ///
    /// let rate = TaxRate::from_percentage(8.0);
    /// assert!((rate.fraction() - 0.08).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate(pct / 100.0)
    }

    /// Returns the rate as a fractional multiplier.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0.0)
    }

    /// Checks if the tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = Item::new(10.99);
        assert_eq!(item.price, 10.99);
    }

    #[test]
    fn test_tax_rate_from_fraction() {
        let rate = TaxRate::from_fraction(0.08);
        assert_eq!(rate.fraction(), 0.08);
        assert!((rate.percentage() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.25);
        assert!((rate.fraction() - 0.0825).abs() < 1e-12);
    }

    #[test]
    fn test_tax_rate_default_is_zero() {
        let rate = TaxRate::default();
        assert!(rate.is_zero());
        assert_eq!(rate.fraction(), 0.0);
    }

    #[test]
    fn test_tax_rate_serializes_as_bare_number() {
        // Newtype transparency on the wire: consumers see a plain number.
        let json = serde_json::to_string(&TaxRate::from_fraction(0.08)).unwrap();
        assert_eq!(json, "0.08");

        let back: TaxRate = serde_json::from_str("0.2").unwrap();
        assert_eq!(back.fraction(), 0.2);
    }

    #[test]
    fn test_item_json_shape() {
        let json = serde_json::to_value(Item::new(10.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 10.0 }));
    }
}
