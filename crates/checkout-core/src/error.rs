//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, limits)
//! 3. Errors are enum variants, never bare strings
//! 4. All errors are synchronous and reported to the immediate caller;
//!    the engine never logs or swallows them
//!
//! ## Error Flow
//! ```text
//! Catalog::lookup ──► NotFound
//!        │
//!        ▼ (propagated through a cart operation)
//! CheckoutSession::add_item ──► UnknownProduct | InvalidQuantity
//! CheckoutSession::remove_item ──► NotInCart
//! CheckoutSession::set_discount ──► InvalidUnit | InvalidRule
//! ```

use thiserror::Error;

use crate::types::PricingMode;

// =============================================================================
// Checkout Error
// =============================================================================

/// Checkout domain errors.
///
/// These represent business rule violations. Callers decide whether to abort
/// the session or prompt for correction.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Catalog lookup miss.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A cart operation referenced an id the catalog does not know.
    ///
    /// ## When This Occurs
    /// - Scanning a barcode that was never loaded into the catalog
    /// - A discount configured for a product that no longer exists
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Quantity is not valid for the product's pricing mode.
    ///
    /// ## When This Occurs
    /// - Quantity is zero or negative
    /// - A fractional quantity on an each-priced product
    #[error("Invalid quantity for {product_id}: {reason}")]
    InvalidQuantity { product_id: String, reason: String },

    /// Removal of a line that is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(String),

    /// A discount rule is incompatible with the product's pricing mode.
    ///
    /// Whole-unit rules (buy-N-get-one-free, bulk threshold) count items and
    /// cannot apply to weight-priced products.
    #[error("Discount on {product_id} requires an {required:?}-priced product")]
    InvalidUnit {
        product_id: String,
        required: PricingMode,
    },

    /// Discount rule parameters are out of range.
    #[error("Invalid discount rule for {product_id}: {reason}")]
    InvalidRule { product_id: String, reason: String },

    /// A product definition failed validation at catalog construction.
    #[error("Invalid product {product_id}: {reason}")]
    InvalidProduct { product_id: String, reason: String },

    /// Cart has exceeded the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds the maximum allowed.
    #[error("Quantity exceeds maximum of {max} units")]
    QuantityTooLarge { max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
