//! # Totals Module
//!
//! Subtotal and total calculations.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Total Calculation                                  │
//! │                                                                         │
//! │  [Item; price] ──► subtotal() ──► subtotal * (1 + rate) ──► total      │
//! │                                                                         │
//! │  Empty input: subtotal is 0, so the total is 0 for any rate            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Validation Here
//! These functions do not inspect their inputs: negative prices and
//! out-of-range rates flow straight through the arithmetic. Callers that
//! want enforcement run the [`crate::validation`] layer first.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Item, TaxRate};

// =============================================================================
// Free Functions
// =============================================================================

/// Sums the item prices before tax.
///
/// ## Example
/// ```rust
/// use pricing_core::{subtotal, Item};
///
/// let items = [Item::new(10.0), Item::new(20.0)];
/// assert_eq!(subtotal(&items), 30.0);
/// assert_eq!(subtotal(&[]), 0.0);
/// ```
pub fn subtotal(items: &[Item]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

/// Calculates the total for a sequence of items at the given tax rate.
///
/// Returns `subtotal * (1 + rate)`. An empty sequence yields 0 for any rate.
///
/// ## Example
/// ```rust
/// use pricing_core::{calculate_total, Item, TaxRate};
///
/// let items = [Item::new(10.0), Item::new(20.0)];
/// let total = calculate_total(&items, TaxRate::from_fraction(0.08));
/// assert!((total - 32.4).abs() < 1e-9);
/// ```
pub fn calculate_total(items: &[Item], tax_rate: TaxRate) -> f64 {
    subtotal(items) * (1.0 + tax_rate.fraction())
}

// =============================================================================
// Price Calculator
// =============================================================================

/// Binds a tax rate so repeated total calculations do not have to thread it.
///
/// Construct once, then call [`calculate`](PriceCalculator::calculate) for
/// arbitrary item collections. Equivalent to calling [`calculate_total`]
/// with the stored rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceCalculator {
    tax_rate: TaxRate,
}

impl PriceCalculator {
    /// Creates a calculator with the given tax rate.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::{Item, PriceCalculator, TaxRate};
    ///
    /// let calc = PriceCalculator::new(TaxRate::from_fraction(0.08));
    /// let total = calc.calculate(&[Item::new(10.0), Item::new(20.0)]);
    /// assert!((total - 32.4).abs() < 1e-9);
    /// ```
    #[inline]
    pub const fn new(tax_rate: TaxRate) -> Self {
        PriceCalculator { tax_rate }
    }

    /// Returns the stored tax rate.
    #[inline]
    pub const fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Calculates the total for the given items using the stored rate.
    pub fn calculate(&self, items: &[Item]) -> f64 {
        calculate_total(items, self.tax_rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn items(prices: &[f64]) -> Vec<Item> {
        prices.iter().copied().map(Item::new).collect()
    }

    #[test]
    fn test_subtotal_sums_prices() {
        assert!((subtotal(&items(&[10.0, 20.0])) - 30.0).abs() < EPSILON);
        assert!((subtotal(&items(&[19.999])) - 19.999).abs() < EPSILON);
    }

    #[test]
    fn test_subtotal_empty_is_zero() {
        assert_eq!(subtotal(&[]), 0.0);
    }

    #[test]
    fn test_calculate_total_applies_tax() {
        // $10.00 + $20.00 at 8% = $32.40
        let total = calculate_total(&items(&[10.0, 20.0]), TaxRate::from_fraction(0.08));
        assert!((total - 32.4).abs() < EPSILON);
    }

    #[test]
    fn test_calculate_total_empty_is_zero_for_any_rate() {
        assert_eq!(calculate_total(&[], TaxRate::from_fraction(0.2)), 0.0);
        assert_eq!(calculate_total(&[], TaxRate::zero()), 0.0);
        assert_eq!(calculate_total(&[], TaxRate::from_fraction(1.0)), 0.0);
    }

    #[test]
    fn test_calculate_total_zero_rate_is_subtotal() {
        let prices = items(&[5.25, 0.75]);
        let total = calculate_total(&prices, TaxRate::zero());
        assert!((total - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_calculate_total_single_item() {
        let total = calculate_total(&items(&[100.0]), TaxRate::from_fraction(0.0825));
        assert!((total - 108.25).abs() < EPSILON);
    }

    #[test]
    fn test_calculator_delegates_to_calculate_total() {
        let rate = TaxRate::from_fraction(0.08);
        let calc = PriceCalculator::new(rate);

        for prices in [vec![], vec![10.0, 20.0], vec![0.0], vec![19.999, 0.001]] {
            let batch = items(&prices);
            assert_eq!(calc.calculate(&batch), calculate_total(&batch, rate));
        }
    }

    #[test]
    fn test_calculator_exposes_rate() {
        let calc = PriceCalculator::new(TaxRate::from_fraction(0.2));
        assert_eq!(calc.tax_rate().fraction(), 0.2);
    }

    #[test]
    fn test_calculator_default_has_zero_rate() {
        let calc = PriceCalculator::default();
        assert!(calc.tax_rate().is_zero());
        assert_eq!(calc.calculate(&items(&[10.0])), 10.0);
    }
}
