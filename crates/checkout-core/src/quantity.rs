//! # Quantity Module
//!
//! Quantities follow the same philosophy as [`crate::money`]: integers only.
//!
//! A quantity is stored in **milliunits** (thousandths of a unit), so
//! weight-priced products can be sold fractionally (2.500 kg) while
//! each-priced products stay on whole units. Three decimal places match
//! what a scale reports and what a receipt prints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Milliunits per whole unit.
pub const MILLI_PER_UNIT: i64 = 1000;

/// An item quantity in integer milliunits.
///
/// `Quantity::from_units(3)` is three items; `Quantity::from_milli(2500)`
/// is 2.5 kg on a scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Quantity(units * MILLI_PER_UNIT)
    }

    /// Creates a quantity from milliunits (thousandths).
    #[inline]
    pub const fn from_milli(milli: i64) -> Self {
        Quantity(milli)
    }

    /// Returns the quantity in milliunits.
    #[inline]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit count, truncating any fraction.
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / MILLI_PER_UNIT
    }

    /// Checks whether the quantity is an exact number of whole units.
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % MILLI_PER_UNIT == 0
    }

    /// Checks if the quantity is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Zero quantity.
    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }
}

impl Add for Quantity {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Quantity(self.0 + other.0)
    }
}

/// Whole quantities print bare ("3"), fractional ones with three decimals
/// ("2.500"). Receipt rendering uses the pricing mode instead; see
/// [`crate::printer`].
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.whole_units())
        } else {
            write!(f, "{}.{:03}", self.whole_units(), (self.0 % MILLI_PER_UNIT).abs())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let qty = Quantity::from_units(3);
        assert_eq!(qty.milli(), 3000);
        assert_eq!(qty.whole_units(), 3);
        assert!(qty.is_whole());
    }

    #[test]
    fn test_fractional() {
        let qty = Quantity::from_milli(2500);
        assert_eq!(qty.whole_units(), 2);
        assert!(!qty.is_whole());
        assert!(qty.is_positive());
    }

    #[test]
    fn test_add_merges() {
        let merged = Quantity::from_units(2) + Quantity::from_units(3);
        assert_eq!(merged, Quantity::from_units(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::from_units(3).to_string(), "3");
        assert_eq!(Quantity::from_milli(2500).to_string(), "2.500");
        assert_eq!(Quantity::from_milli(50).to_string(), "0.050");
    }
}
