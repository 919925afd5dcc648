//! # Receipt Module
//!
//! Builder-then-seal receipt assembly.
//!
//! The builder accumulates finalized lines one at a time; `seal` consumes it
//! and produces an immutable [`Receipt`]. Because sealing takes the builder
//! by value and `Receipt` exposes no mutators, post-seal mutation is rejected
//! by the compiler rather than at runtime.
//!
//! No business logic lives here beyond summation - discount math happens in
//! [`crate::discount`] before a line ever reaches the builder, which keeps
//! pricing testable independently of presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::quantity::Quantity;
use crate::types::PricingMode;

// =============================================================================
// Applied Discount
// =============================================================================

/// A discount that actually reduced a line's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    /// Receipt-facing description, e.g. "10% off".
    pub description: String,

    /// Amount saved in cents (always positive).
    pub amount_cents: i64,
}

impl AppliedDiscount {
    /// Returns the saved amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Receipt Line
// =============================================================================

/// A finalized line on the receipt. All product data is a snapshot taken at
/// scan time; nothing here references the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product_id: String,
    pub name: String,
    pub quantity: Quantity,
    pub mode: PricingMode,
    /// Unit price in cents at time of sale.
    pub unit_price_cents: i64,
    /// Discount applied to this line, if any.
    pub discount: Option<AppliedDiscount>,
    /// Line total after discount.
    pub line_total_cents: i64,
}

impl ReceiptLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the discounted line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// An immutable, finalized summary of a completed checkout.
///
/// Produced once per session by [`crate::session::CheckoutSession::finalize`];
/// fields are private and read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    id: String,
    created_at: DateTime<Utc>,
    lines: Vec<ReceiptLine>,
    total_cents: i64,
}

impl Receipt {
    /// Receipt identifier (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the receipt was sealed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Finalized lines in scan order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Grand total across all lines.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total amount saved by discounts.
    pub fn total_savings(&self) -> Money {
        let cents = self
            .lines
            .iter()
            .filter_map(|l| l.discount.as_ref())
            .map(|d| d.amount_cents)
            .sum();
        Money::from_cents(cents)
    }
}

// =============================================================================
// Receipt Builder
// =============================================================================

/// Incremental receipt assembly: append lines, then seal.
#[derive(Debug, Default)]
pub struct ReceiptBuilder {
    lines: Vec<ReceiptLine>,
}

impl ReceiptBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        ReceiptBuilder::default()
    }

    /// Appends a finalized line.
    pub fn push_line(&mut self, line: ReceiptLine) -> &mut Self {
        self.lines.push(line);
        self
    }

    /// Seals the receipt, computing the grand total.
    ///
    /// Consumes the builder: once sealed, no further lines can be added.
    pub fn seal(self) -> Receipt {
        let total_cents = self.lines.iter().map(|l| l.line_total_cents).sum();
        Receipt {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            lines: self.lines,
            total_cents,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, total_cents: i64, discount: Option<AppliedDiscount>) -> ReceiptLine {
        ReceiptLine {
            product_id: id.to_string(),
            name: id.to_string(),
            quantity: Quantity::from_units(1),
            mode: PricingMode::Each,
            unit_price_cents: total_cents,
            discount,
            line_total_cents: total_cents,
        }
    }

    #[test]
    fn test_seal_sums_line_totals() {
        let mut builder = ReceiptBuilder::new();
        builder.push_line(line("a", 150, None));
        builder.push_line(line("b", 250, None));

        let receipt = builder.seal();
        assert_eq!(receipt.total().cents(), 400);
        assert_eq!(receipt.lines().len(), 2);
        assert!(!receipt.id().is_empty());
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = ReceiptBuilder::new().seal();
        assert!(receipt.lines().is_empty());
        assert_eq!(receipt.total(), Money::zero());
        assert_eq!(receipt.total_savings(), Money::zero());
    }

    #[test]
    fn test_total_savings() {
        let mut builder = ReceiptBuilder::new();
        builder.push_line(line(
            "a",
            150,
            Some(AppliedDiscount {
                description: "10% off".to_string(),
                amount_cents: 17,
            }),
        ));
        builder.push_line(line("b", 250, None));

        assert_eq!(builder.seal().total_savings().cents(), 17);
    }

    #[test]
    fn test_receipt_serializes() {
        let mut builder = ReceiptBuilder::new();
        builder.push_line(line("a", 150, None));
        let receipt = builder.seal();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["total_cents"], 150);
        assert_eq!(json["lines"][0]["product_id"], "a");
    }
}
