//! # Domain Types
//!
//! Core domain types shared across the checkout engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌─────────────────────┐ │
//! │  │    Product     │   │  PricingMode   │   │    DiscountKind     │ │
//! │  │  ────────────  │   │  ────────────  │   │  ─────────────────  │ │
//! │  │  id            │   │  Each          │   │  PercentageOff      │ │
//! │  │  name          │   │  Weight        │   │  BuyNGetOneFree     │ │
//! │  │  price_cents   │   └────────────────┘   │  BulkPrice          │ │
//! │  │  mode          │                        └─────────────────────┘ │
//! │  └────────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;

// =============================================================================
// Pricing Mode
// =============================================================================

/// How a product is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Priced per item; quantities must be whole.
    Each,
    /// Priced per kilogram; quantities may be fractional.
    Weight,
}

// =============================================================================
// Product
// =============================================================================

/// A product as registered in the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (barcode, SKU, or name - the loader decides).
    pub id: String,

    /// Display name shown on the receipt.
    pub name: String,

    /// Unit price in cents (per item, or per kilogram for weight pricing).
    pub price_cents: i64,

    /// Pricing mode.
    pub mode: PricingMode,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Rules
    /// - `id` must be non-empty
    /// - `price_cents` must be strictly positive
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
        mode: PricingMode,
    ) -> CheckoutResult<Self> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(CheckoutError::InvalidProduct {
                product_id: id,
                reason: "id must not be empty".to_string(),
            });
        }
        if price_cents <= 0 {
            return Err(CheckoutError::InvalidProduct {
                product_id: id,
                reason: format!("price must be positive, got {price_cents}"),
            });
        }

        Ok(Product {
            id,
            name: name.into(),
            price_cents,
            mode,
        })
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Discount Kind
// =============================================================================

/// A per-product pricing adjustment. Zero or one rule per product.
///
/// The tagged union replaces the nested-conditional dispatch a naive
/// implementation grows: each variant routes to exactly one pure pricing
/// function in [`crate::discount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountKind {
    /// Percentage off the line total, in basis points (1000 = 10%).
    PercentageOff { bps: u32 },

    /// Buy `n` items, get one more free. Each-priced products only.
    BuyNGetOneFree { n: i64 },

    /// At or above `threshold` items, every item costs `unit_price_cents`
    /// instead of the catalog price. Each-priced products only.
    BulkPrice {
        threshold: i64,
        unit_price_cents: i64,
    },
}

impl DiscountKind {
    /// The pricing mode this rule requires, if it is mode-restricted.
    ///
    /// Item-counting rules only make sense for whole units.
    pub fn required_mode(&self) -> Option<PricingMode> {
        match self {
            DiscountKind::PercentageOff { .. } => None,
            DiscountKind::BuyNGetOneFree { .. } | DiscountKind::BulkPrice { .. } => {
                Some(PricingMode::Each)
            }
        }
    }

    /// Receipt-facing description of the rule.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::DiscountKind;
    ///
    /// assert_eq!(DiscountKind::PercentageOff { bps: 1000 }.describe(), "10% off");
    /// assert_eq!(DiscountKind::BuyNGetOneFree { n: 2 }.describe(), "buy 2 get 1 free");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            DiscountKind::PercentageOff { bps } => {
                if bps % 100 == 0 {
                    format!("{}% off", bps / 100)
                } else {
                    format!("{}.{:02}% off", bps / 100, bps % 100)
                }
            }
            DiscountKind::BuyNGetOneFree { n } => format!("buy {n} get 1 free"),
            DiscountKind::BulkPrice {
                threshold,
                unit_price_cents,
            } => format!(
                "{threshold}+ at {} each",
                Money::from_cents(*unit_price_cents)
            ),
        }
    }

    /// Validates the rule parameters.
    ///
    /// ## Rules
    /// - percentage: `0 < bps < 10000` (a 0% or 100%+ "discount" is a
    ///   configuration mistake, not a price)
    /// - buy-N-get-one-free: `n >= 1`
    /// - bulk price: `threshold >= 1`, price non-negative
    pub fn validate(&self, product_id: &str) -> CheckoutResult<()> {
        let reason = match self {
            DiscountKind::PercentageOff { bps } if *bps == 0 || *bps >= 10000 => {
                Some(format!("percentage must be between 0 and 100, got {} bps", bps))
            }
            DiscountKind::BuyNGetOneFree { n } if *n < 1 => {
                Some(format!("n must be at least 1, got {n}"))
            }
            DiscountKind::BulkPrice { threshold, .. } if *threshold < 1 => {
                Some(format!("threshold must be at least 1, got {threshold}"))
            }
            DiscountKind::BulkPrice {
                unit_price_cents, ..
            } if *unit_price_cents < 0 => {
                Some(format!("price must not be negative, got {unit_price_cents}"))
            }
            _ => None,
        };

        match reason {
            Some(reason) => Err(CheckoutError::InvalidRule {
                product_id: product_id.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
