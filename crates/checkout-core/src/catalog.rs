//! # Catalog Module
//!
//! The read-only product registry. Populated once by an external loader
//! (CSV, database - not this crate's concern), then only ever queried.
//!
//! Because there is no mutation after construction, a `Catalog` can be
//! shared across concurrent checkout sessions behind an `Arc` with no
//! locking.

use std::collections::HashMap;

use crate::error::{CheckoutError, CheckoutResult};
use crate::types::Product;

/// Immutable registry of products keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog from a collection of products.
    ///
    /// Fails with [`CheckoutError::InvalidProduct`] on a duplicate id;
    /// silently overwriting a price is exactly the kind of defect an
    /// immutable catalog exists to prevent.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> CheckoutResult<Self> {
        let mut map = HashMap::new();
        for product in products {
            if map.contains_key(&product.id) {
                return Err(CheckoutError::InvalidProduct {
                    product_id: product.id,
                    reason: "duplicate product id".to_string(),
                });
            }
            map.insert(product.id.clone(), product);
        }
        Ok(Catalog { products: map })
    }

    /// Looks up a product by id.
    ///
    /// Fails with [`CheckoutError::NotFound`] when the id is absent.
    pub fn lookup(&self, product_id: &str) -> CheckoutResult<&Product> {
        self.products
            .get(product_id)
            .ok_or_else(|| CheckoutError::NotFound(product_id.to_string()))
    }

    /// Checks whether a product id is registered.
    pub fn contains(&self, product_id: &str) -> bool {
        self.products.contains_key(product_id)
    }

    /// Number of registered products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PricingMode;

    fn apple() -> Product {
        Product::new("apple", "Apple", 50, PricingMode::Each).unwrap()
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let catalog = Catalog::with_products([apple()]).unwrap();

        assert_eq!(catalog.lookup("apple").unwrap().price_cents, 50);
        assert!(matches!(
            catalog.lookup("kiwi"),
            Err(CheckoutError::NotFound(id)) if id == "kiwi"
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::with_products([apple(), apple()]);
        assert!(matches!(
            result,
            Err(CheckoutError::InvalidProduct { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(!catalog.contains("apple"));
    }
}
