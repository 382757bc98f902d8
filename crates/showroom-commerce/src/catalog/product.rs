//! Product types.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// The client holds a read-only, possibly stale copy of what the backend
/// returned. `stock` is the backend's authoritative sellable count at fetch
/// time; it is never mutated locally, only refreshed by re-fetching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price, non-negative, in the smallest currency unit.
    pub price: Money,
    /// Authoritative stock count as last fetched. Invariant: `stock >= 0`.
    pub stock: i64,
    /// Category this product belongs to.
    pub category: Category,
    /// Full description.
    pub description: String,
    /// Image URI or data URI.
    pub image: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        stock: i64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            category,
            description: String::new(),
            image: String::new(),
        }
    }

    /// Check if the product has at least one sellable unit.
    pub fn is_in_stock(&self) -> bool {
        self.stock >= 1
    }

    /// Check domain invariants, as enforced at the decode boundary.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.stock < 0 {
            return Err(CommerceError::Validation(format!(
                "negative stock {} for product {}",
                self.stock, self.id
            )));
        }
        if self.price.is_negative() {
            return Err(CommerceError::Validation(format!(
                "negative price {} for product {}",
                self.price.amount, self.id
            )));
        }
        Ok(())
    }
}
