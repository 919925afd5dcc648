//! # Checkout Session
//!
//! The engine: one session per customer at the lane. It owns the cart,
//! borrows the catalog (shared, immutable), and holds the discount
//! configuration for this lane.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Session Operations                      │
//! │                                                                     │
//! │  Host Action            Session Call            Effect              │
//! │  ───────────            ────────────            ──────              │
//! │  Load offers ─────────► set_discount() ───────► rules[id] = kind    │
//! │  Scan product ────────► add_item() ───────────► merge-or-append     │
//! │  Void a line ─────────► remove_item() ────────► delete line         │
//! │  Finish sale ─────────► finalize() ───────────► sealed Receipt      │
//! │                                                                     │
//! │  NOTE: finalize() consumes the session. A receipt is produced       │
//! │        exactly once and the cart cannot be touched afterwards.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are validated when registered (parameters in range, pricing mode
//! compatible), so `finalize` cannot fail: it is a pure fold over the cart.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::discount;
use crate::error::{CheckoutError, CheckoutResult};
use crate::quantity::Quantity;
use crate::receipt::{AppliedDiscount, Receipt, ReceiptBuilder, ReceiptLine};
use crate::types::DiscountKind;

/// A single checkout session.
///
/// The catalog is injected at construction and shared immutably; there is
/// no ambient or global product lookup.
#[derive(Debug)]
pub struct CheckoutSession {
    catalog: Arc<Catalog>,
    rules: HashMap<String, DiscountKind>,
    cart: Cart,
}

impl CheckoutSession {
    /// Starts a session against a shared catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        CheckoutSession {
            catalog,
            rules: HashMap::new(),
            cart: Cart::new(),
        }
    }

    /// Registers (or replaces) the discount rule for a product.
    ///
    /// At most one rule per product. Validation happens here, not at
    /// finalize:
    /// - [`CheckoutError::UnknownProduct`] if the id is not in the catalog
    /// - [`CheckoutError::InvalidUnit`] if a whole-unit rule targets a
    ///   weight-priced product
    /// - [`CheckoutError::InvalidRule`] for out-of-range parameters
    pub fn set_discount(&mut self, product_id: &str, kind: DiscountKind) -> CheckoutResult<()> {
        let product = self
            .catalog
            .lookup(product_id)
            .map_err(|_| CheckoutError::UnknownProduct(product_id.to_string()))?;

        kind.validate(product_id)?;
        if let Some(required) = kind.required_mode() {
            if product.mode != required {
                return Err(CheckoutError::InvalidUnit {
                    product_id: product_id.to_string(),
                    required,
                });
            }
        }

        debug!(product_id, rule = %kind.describe(), "discount registered");
        self.rules.insert(product_id.to_string(), kind);
        Ok(())
    }

    /// Scans a product into the cart.
    ///
    /// Re-scanning an existing product merges quantities. Fails with
    /// [`CheckoutError::UnknownProduct`] for an unregistered id and
    /// [`CheckoutError::InvalidQuantity`] for a non-positive or
    /// wrongly-fractional quantity; the cart is left unchanged on error.
    pub fn add_item(&mut self, product_id: &str, quantity: Quantity) -> CheckoutResult<()> {
        let product = self
            .catalog
            .lookup(product_id)
            .map_err(|_| CheckoutError::UnknownProduct(product_id.to_string()))?;

        self.cart.add(product, quantity)?;
        debug!(product_id, quantity = quantity.milli(), "item added");
        Ok(())
    }

    /// Voids a line from the cart.
    pub fn remove_item(&mut self, product_id: &str) -> CheckoutResult<()> {
        self.cart.remove(product_id)?;
        debug!(product_id, "item removed");
        Ok(())
    }

    /// Read access to the cart (closed contract: no direct line mutation).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Finalizes the session into a sealed receipt.
    ///
    /// Per line: pre-discount subtotal, then at most one discount rule
    /// applied through the kind-dispatch table in [`crate::discount`].
    /// Consumes the session; an empty cart yields an empty receipt with
    /// total zero.
    pub fn finalize(self) -> Receipt {
        let mut builder = ReceiptBuilder::new();

        for line in self.cart.lines() {
            let full = line.subtotal();
            let (total, applied) = match self.rules.get(&line.product_id) {
                Some(kind) => {
                    let discounted = discount::line_total(kind, line.unit_price(), line.quantity);
                    let saved = full - discounted;
                    if saved.is_positive() {
                        let applied = AppliedDiscount {
                            description: kind.describe(),
                            amount_cents: saved.cents(),
                        };
                        (discounted, Some(applied))
                    } else {
                        // rule registered but condition not met: full price
                        (full, None)
                    }
                }
                None => (full, None),
            };

            builder.push_line(ReceiptLine {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
                mode: line.mode,
                unit_price_cents: line.unit_price_cents,
                discount: applied,
                line_total_cents: total.cents(),
            });
        }

        let receipt = builder.seal();
        debug!(
            receipt_id = receipt.id(),
            total_cents = receipt.total().cents(),
            lines = receipt.lines().len(),
            "session finalized"
        );
        receipt
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{PricingMode, Product};

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::with_products([
                Product::new("apple", "Apple", 50, PricingMode::Each).unwrap(),
                Product::new("toothbrush", "Toothbrush", 99, PricingMode::Each).unwrap(),
                Product::new("apples", "Apples", 199, PricingMode::Weight).unwrap(),
                Product::new("rice", "Rice 1kg Bag", 269, PricingMode::Each).unwrap(),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_add_unknown_product_leaves_cart_unchanged() {
        let mut session = CheckoutSession::new(catalog());

        assert!(matches!(
            session.add_item("kiwi", Quantity::from_units(1)),
            Err(CheckoutError::UnknownProduct(id)) if id == "kiwi"
        ));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_rescan_merges() {
        let mut session = CheckoutSession::new(catalog());
        session.add_item("apple", Quantity::from_units(2)).unwrap();
        session.add_item("apple", Quantity::from_units(3)).unwrap();

        assert_eq!(session.cart().line_count(), 1);
        assert_eq!(session.cart().lines()[0].quantity, Quantity::from_units(5));
    }

    #[test]
    fn test_remove_absent_fails() {
        let mut session = CheckoutSession::new(catalog());
        assert!(matches!(
            session.remove_item("apple"),
            Err(CheckoutError::NotInCart(_))
        ));
    }

    #[test]
    fn test_empty_cart_finalizes_to_zero_receipt() {
        let receipt = CheckoutSession::new(catalog()).finalize();
        assert!(receipt.lines().is_empty());
        assert_eq!(receipt.total(), Money::zero());
    }

    /// The worked example: 4 apples at $0.50 with buy-2-get-1-free pays
    /// for 3 (4 - floor(4/3) = 3) = $1.50.
    #[test]
    fn test_buy_two_get_one_free_apples() {
        let mut session = CheckoutSession::new(catalog());
        session
            .set_discount("apple", DiscountKind::BuyNGetOneFree { n: 2 })
            .unwrap();
        session.add_item("apple", Quantity::from_units(4)).unwrap();

        let receipt = session.finalize();
        assert_eq!(receipt.total().cents(), 150);

        let line = &receipt.lines()[0];
        assert_eq!(line.discount.as_ref().unwrap().amount_cents, 50);
        assert_eq!(line.discount.as_ref().unwrap().description, "buy 2 get 1 free");
    }

    #[test]
    fn test_ten_percent_on_other_product_does_not_leak() {
        let mut session = CheckoutSession::new(catalog());
        session
            .set_discount("toothbrush", DiscountKind::PercentageOff { bps: 1000 })
            .unwrap();
        session.add_item("apples", Quantity::from_milli(2500)).unwrap();

        let receipt = session.finalize();
        // 2.5 kg × $1.99 = $4.975 → $4.98, no discount line
        assert_eq!(receipt.total().cents(), 498);
        assert!(receipt.lines()[0].discount.is_none());
        assert_eq!(receipt.total_savings(), Money::zero());
    }

    #[test]
    fn test_rule_below_threshold_leaves_full_price() {
        let mut session = CheckoutSession::new(catalog());
        session
            .set_discount(
                "rice",
                DiscountKind::BulkPrice {
                    threshold: 5,
                    unit_price_cents: 249,
                },
            )
            .unwrap();
        session.add_item("rice", Quantity::from_units(4)).unwrap();

        let receipt = session.finalize();
        assert_eq!(receipt.total().cents(), 4 * 269);
        assert!(receipt.lines()[0].discount.is_none());
    }

    #[test]
    fn test_bulk_threshold_met() {
        let mut session = CheckoutSession::new(catalog());
        session
            .set_discount(
                "rice",
                DiscountKind::BulkPrice {
                    threshold: 5,
                    unit_price_cents: 249,
                },
            )
            .unwrap();
        session.add_item("rice", Quantity::from_units(5)).unwrap();

        let receipt = session.finalize();
        assert_eq!(receipt.total().cents(), 5 * 249);
        assert_eq!(
            receipt.lines()[0].discount.as_ref().unwrap().amount_cents,
            5 * (269 - 249)
        );
    }

    #[test]
    fn test_whole_unit_rule_on_weight_product_rejected() {
        let mut session = CheckoutSession::new(catalog());

        assert!(matches!(
            session.set_discount("apples", DiscountKind::BuyNGetOneFree { n: 2 }),
            Err(CheckoutError::InvalidUnit { required: PricingMode::Each, .. })
        ));
        assert!(matches!(
            session.set_discount(
                "apples",
                DiscountKind::BulkPrice {
                    threshold: 3,
                    unit_price_cents: 100
                }
            ),
            Err(CheckoutError::InvalidUnit { .. })
        ));

        // percentage is mode-agnostic
        session
            .set_discount("apples", DiscountKind::PercentageOff { bps: 2000 })
            .unwrap();
    }

    #[test]
    fn test_discount_for_unknown_product_rejected() {
        let mut session = CheckoutSession::new(catalog());
        assert!(matches!(
            session.set_discount("kiwi", DiscountKind::PercentageOff { bps: 1000 }),
            Err(CheckoutError::UnknownProduct(_))
        ));
    }

    #[test]
    fn test_replacing_a_rule_keeps_zero_or_one_per_product() {
        let mut session = CheckoutSession::new(catalog());
        session
            .set_discount("apple", DiscountKind::PercentageOff { bps: 1000 })
            .unwrap();
        session
            .set_discount("apple", DiscountKind::BuyNGetOneFree { n: 2 })
            .unwrap();
        session.add_item("apple", Quantity::from_units(3)).unwrap();

        let receipt = session.finalize();
        // only the latest rule applies: pay for 2 of 3
        assert_eq!(receipt.total().cents(), 100);
    }

    #[test]
    fn test_mixed_cart_grand_total() {
        let mut session = CheckoutSession::new(catalog());
        session
            .set_discount("toothbrush", DiscountKind::PercentageOff { bps: 1000 })
            .unwrap();
        session.add_item("toothbrush", Quantity::from_units(2)).unwrap();
        session.add_item("apples", Quantity::from_milli(2500)).unwrap();

        let receipt = session.finalize();
        // toothbrush: 198 - 20 = 178; apples: 498
        assert_eq!(receipt.total().cents(), 676);
        assert_eq!(receipt.total_savings().cents(), 20);
    }

    #[test]
    fn test_catalog_shared_across_sessions() {
        let catalog = catalog();
        let mut a = CheckoutSession::new(Arc::clone(&catalog));
        let mut b = CheckoutSession::new(Arc::clone(&catalog));

        a.add_item("apple", Quantity::from_units(1)).unwrap();
        b.add_item("apple", Quantity::from_units(2)).unwrap();

        assert_eq!(a.finalize().total().cents(), 50);
        assert_eq!(b.finalize().total().cents(), 100);
    }
}
