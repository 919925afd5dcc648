//! # Cart Module
//!
//! The session-scoped cart: an ordered sequence of scanned lines.
//!
//! ## Invariants
//! - Lines are unique by product id (re-scanning merges quantities,
//!   first-seen order is preserved)
//! - Every line's product exists in the catalog at the time it is added
//! - Quantity is strictly positive, and whole for each-priced products
//! - Maximum distinct lines: [`crate::MAX_CART_LINES`]
//! - Maximum quantity per line: [`crate::MAX_LINE_UNITS`] units
//!
//! ## Snapshot Pattern
//! A line freezes the product's name, price, and pricing mode at the moment
//! it is scanned. If the catalog is swapped under a long-lived session, the
//! customer still pays the price they saw on the shelf.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::quantity::Quantity;
use crate::types::{PricingMode, Product};
use crate::{MAX_CART_LINES, MAX_LINE_UNITS};

// =============================================================================
// Cart Line
// =============================================================================

/// One scanned product in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id (catalog key).
    pub product_id: String,

    /// Product name at time of scanning (frozen).
    pub name: String,

    /// Unit price in cents at time of scanning (frozen).
    pub unit_price_cents: i64,

    /// Pricing mode at time of scanning (frozen).
    pub mode: PricingMode,

    /// Accumulated quantity.
    pub quantity: Quantity,

    /// When this line was first scanned.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn from_product(product: &Product, quantity: Quantity) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            mode: product.mode,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Pre-discount subtotal for this line (unit price × quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price().mul_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart. Owned exclusively by one checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or merges quantity if already present.
    ///
    /// The caller (the checkout session) has already resolved `product`
    /// against the catalog; this method enforces quantity validity and
    /// cart limits.
    pub fn add(&mut self, product: &Product, quantity: Quantity) -> CheckoutResult<()> {
        validate_quantity(product, quantity)?;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            let merged = line.quantity + quantity;
            if merged.whole_units() > MAX_LINE_UNITS {
                return Err(CheckoutError::QuantityTooLarge {
                    max: MAX_LINE_UNITS,
                });
            }
            line.quantity = merged;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CheckoutError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }
        if quantity.whole_units() > MAX_LINE_UNITS {
            return Err(CheckoutError::QuantityTooLarge {
                max: MAX_LINE_UNITS,
            });
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Removes a line by product id.
    ///
    /// Fails with [`CheckoutError::NotInCart`] if the product is absent.
    pub fn remove(&mut self, product_id: &str) -> CheckoutResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);

        if self.lines.len() == initial_len {
            Err(CheckoutError::NotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// The lines in first-seen order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Pre-discount subtotal across all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.subtotal()).fold(Money::zero(), |a, b| a + b)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// When the cart was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

/// Quantity rules: strictly positive, and whole units for each-priced
/// products. Fractional quantities are a scale reading and only make sense
/// for weight pricing.
fn validate_quantity(product: &Product, quantity: Quantity) -> CheckoutResult<()> {
    if !quantity.is_positive() {
        return Err(CheckoutError::InvalidQuantity {
            product_id: product.id.clone(),
            reason: "must be positive".to_string(),
        });
    }
    if product.mode == PricingMode::Each && !quantity.is_whole() {
        return Err(CheckoutError::InvalidQuantity {
            product_id: product.id.clone(),
            reason: "each-priced products require whole quantities".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
