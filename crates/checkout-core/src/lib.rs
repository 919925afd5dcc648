//! # checkout-core: Pure Checkout/Pricing Logic
//!
//! This crate is the pricing engine for a retail checkout lane. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │           Host Application (POS terminal, service)            │ │
//! │  │   catalog loader ──► scan loop ──► receipt consumer           │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │             ★ checkout-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐ │ │
//! │  │  │ catalog │ │  cart   │ │discount │ │ receipt  │ │printer │ │ │
//! │  │  │ Product │ │CartLine │ │  rules  │ │ Builder  │ │ 40-col │ │ │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘ │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PricingMode, DiscountKind)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`quantity`] - Quantity type in integer milliunits (weight-safe)
//! - [`catalog`] - Immutable product registry
//! - [`cart`] - Session-scoped cart with merge-on-rescan semantics
//! - [`discount`] - One pure pricing function per discount kind
//! - [`receipt`] - Builder-then-seal receipt assembly
//! - [`printer`] - Fixed-width receipt rendering (pure strings)
//! - [`session`] - The checkout engine tying it all together
//! - [`error`] - Typed domain errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every pricing function is deterministic
//! 2. **No I/O**: catalog loading and receipt printing hardware live outside
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use checkout_core::{
//!     Catalog, CheckoutSession, DiscountKind, PricingMode, Product, Quantity,
//! };
//!
//! let catalog = Arc::new(
//!     Catalog::with_products([
//!         Product::new("apple", "Apple", 50, PricingMode::Each).unwrap(),
//!     ])
//!     .unwrap(),
//! );
//!
//! let mut session = CheckoutSession::new(catalog);
//! session
//!     .set_discount("apple", DiscountKind::BuyNGetOneFree { n: 2 })
//!     .unwrap();
//! session.add_item("apple", Quantity::from_units(4)).unwrap();
//!
//! // 4 apples, buy-2-get-1-free: pay for 3
//! let receipt = session.finalize();
//! assert_eq!(receipt.total().cents(), 150);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;
pub mod printer;
pub mod quantity;
pub mod receipt;
pub mod session;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CheckoutError, CheckoutResult};
pub use money::Money;
pub use printer::ReceiptPrinter;
pub use quantity::Quantity;
pub use receipt::{AppliedDiscount, Receipt, ReceiptBuilder, ReceiptLine};
pub use session::CheckoutSession;
pub use types::{DiscountKind, PricingMode, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line, in whole units.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_UNITS: i64 = 999;
