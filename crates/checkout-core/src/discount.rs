//! # Discount Pricing Functions
//!
//! One pure function per [`DiscountKind`], routed by a single match in
//! [`line_total`]. Each function is total over its inputs, has no side
//! effects, and is unit-tested on its own.
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │               DiscountKind ──► pricing function                     │
//! │                                                                     │
//! │  PercentageOff { bps }      ──► percentage_off                      │
//! │  BuyNGetOneFree { n }       ──► buy_n_get_one_free                  │
//! │  BulkPrice { threshold, r } ──► bulk_price                          │
//! │                                                                     │
//! │  Adding a kind = one enum variant + one pure function + tests.      │
//! │  No existing branch is ever touched.                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mode compatibility (whole-unit rules on each-priced products) is checked
//! when the rule is registered, so these functions can assume valid input
//! and stay total.

use crate::money::Money;
use crate::quantity::Quantity;
use crate::types::DiscountKind;

/// Computes the discounted line total for a rule.
///
/// Returns the full price when the rule's condition is not met (e.g.
/// quantity below a bulk threshold). Never returns more than the
/// undiscounted total.
pub fn line_total(kind: &DiscountKind, unit_price: Money, quantity: Quantity) -> Money {
    match *kind {
        DiscountKind::PercentageOff { bps } => percentage_off(unit_price, quantity, bps),
        DiscountKind::BuyNGetOneFree { n } => buy_n_get_one_free(unit_price, quantity, n),
        DiscountKind::BulkPrice {
            threshold,
            unit_price_cents,
        } => bulk_price(
            unit_price,
            quantity,
            threshold,
            Money::from_cents(unit_price_cents),
        ),
    }
}

/// Percentage off the full line total.
///
/// `total × (1 - bps/10000)`, rounded half-up on the discount amount.
fn percentage_off(unit_price: Money, quantity: Quantity, bps: u32) -> Money {
    unit_price
        .mul_quantity(quantity)
        .apply_percentage_discount(bps)
}

/// Buy `n`, get one free: every full group of `n + 1` items contains one
/// free item.
///
/// `payable = units - units / (n + 1)`; the leftover below a full group is
/// paid in full.
fn buy_n_get_one_free(unit_price: Money, quantity: Quantity, n: i64) -> Money {
    let units = quantity.whole_units();
    let free = units / (n + 1);
    unit_price * (units - free)
}

/// Bulk threshold price: at or above `threshold` items, every item is
/// charged at `reduced` instead of the catalog price.
fn bulk_price(unit_price: Money, quantity: Quantity, threshold: i64, reduced: Money) -> Money {
    let units = quantity.whole_units();
    if units >= threshold {
        reduced * units
    } else {
        unit_price * units
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_off_never_exceeds_full_price() {
        let unit_price = Money::from_cents(99);
        let quantity = Quantity::from_units(3);
        let full = unit_price.mul_quantity(quantity);

        for bps in [500, 1000, 2500, 9999] {
            let total = percentage_off(unit_price, quantity, bps);
            assert!(total < full, "bps {bps} should reduce the total");
            assert!(total.cents() >= 0);
        }

        // a discount below half a cent rounds away to nothing
        assert_eq!(percentage_off(unit_price, quantity, 1), full);
    }

    #[test]
    fn test_percentage_off_ten_percent() {
        // 3 × $0.99 = $2.97; 10% = $0.297 → $0.30 off → $2.67
        let total = percentage_off(Money::from_cents(99), Quantity::from_units(3), 1000);
        assert_eq!(total.cents(), 267);
    }

    #[test]
    fn test_percentage_off_on_weight() {
        // 2.5 kg at $1.99 = $4.98 (rounded); 20% = $1.00 (99.5 → 100) → $3.98
        let total = percentage_off(Money::from_cents(199), Quantity::from_milli(2500), 2000);
        assert_eq!(total.cents(), 398);
    }

    #[test]
    fn test_buy_n_get_one_free_exact_groups() {
        // quantity = k×(n+1) gives exactly k free units
        let unit_price = Money::from_cents(100);
        for k in 1..5 {
            let quantity = Quantity::from_units(k * 3);
            let total = buy_n_get_one_free(unit_price, quantity, 2);
            assert_eq!(total.cents(), (k * 3 - k) * 100);
        }
    }

    #[test]
    fn test_buy_n_get_one_free_partial_group_pays_full() {
        let unit_price = Money::from_cents(100);

        // below a full group: no free items
        assert_eq!(buy_n_get_one_free(unit_price, Quantity::from_units(2), 2).cents(), 200);
        // 4 = one group of 3 + 1 leftover: one free
        assert_eq!(buy_n_get_one_free(unit_price, Quantity::from_units(4), 2).cents(), 300);
    }

    #[test]
    fn test_buy_one_get_one_free() {
        let unit_price = Money::from_cents(250);
        assert_eq!(buy_n_get_one_free(unit_price, Quantity::from_units(2), 1).cents(), 250);
        assert_eq!(buy_n_get_one_free(unit_price, Quantity::from_units(5), 1).cents(), 750);
    }

    #[test]
    fn test_bulk_price_below_threshold_is_full_price() {
        let total = bulk_price(
            Money::from_cents(100),
            Quantity::from_units(4),
            5,
            Money::from_cents(80),
        );
        assert_eq!(total.cents(), 400);
    }

    #[test]
    fn test_bulk_price_at_and_above_threshold() {
        let unit_price = Money::from_cents(100);
        let reduced = Money::from_cents(80);

        assert_eq!(bulk_price(unit_price, Quantity::from_units(5), 5, reduced).cents(), 400);
        assert_eq!(bulk_price(unit_price, Quantity::from_units(7), 5, reduced).cents(), 560);
    }

    #[test]
    fn test_dispatch_routes_by_kind() {
        let unit_price = Money::from_cents(100);
        let quantity = Quantity::from_units(6);

        assert_eq!(
            line_total(&DiscountKind::PercentageOff { bps: 5000 }, unit_price, quantity).cents(),
            300
        );
        assert_eq!(
            line_total(&DiscountKind::BuyNGetOneFree { n: 2 }, unit_price, quantity).cents(),
            400
        );
        assert_eq!(
            line_total(
                &DiscountKind::BulkPrice {
                    threshold: 5,
                    unit_price_cents: 80
                },
                unit_price,
                quantity
            )
            .cents(),
            480
        );
    }
}
