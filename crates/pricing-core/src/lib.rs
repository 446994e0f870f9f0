//! # pricing-core: Pure Pricing Logic
//!
//! Sums item prices into a subtotal, applies a fractional tax rate, and
//! formats amounts for display. Everything in this crate is a pure function
//! over plain values.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ★ pricing-core (THIS CRATE) ★                       │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐           │
//! │   │   types   │  │  totals   │  │ currency  │  │ validation│           │
//! │   │   Item    │  │ subtotal  │  │  format   │  │   rules   │           │
//! │   │  TaxRate  │  │   total   │  │  "$x.xx"  │  │  checks   │           │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘           │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain value types (`Item`, `TaxRate`)
//! - [`totals`] - Subtotal/total arithmetic and [`PriceCalculator`]
//! - [`currency`] - Currency display formatting
//! - [`error`] - Validation error types
//! - [`validation`] - Opt-in input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Trusting Arithmetic**: The calculations never validate; the
//!    validation module is a separate layer callers opt into at boundaries
//!
//! ## Example Usage
//!
//! ```rust
//! use pricing_core::{calculate_total, format_currency, Item, TaxRate};
//!
//! let items = [Item::new(10.0), Item::new(20.0)];
//! let total = calculate_total(&items, TaxRate::from_fraction(0.08));
//!
//! assert!((total - 32.4).abs() < 1e-9);
//! assert_eq!(format_currency(total), "$32.40");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pricing_core::Item` instead of
// `use pricing_core::types::Item`

pub use currency::format_currency;
pub use error::ValidationError;
pub use totals::{calculate_total, subtotal, PriceCalculator};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Retry budget shared with call sites that fetch prices from fallible
/// sources. Nothing in this crate retries; the constant only pins the limit
/// in one place.
pub const MAX_RETRIES: u32 = 3;

/// Companion timeout for the same call sites, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
