//! Stock reconciliation for cart mutations.
//!
//! Single-shot decision functions the click handlers call before issuing a
//! network request. The check-then-act sequence is not atomic with respect to
//! the backend: two tabs can both see `Allow` and jointly oversell. The
//! backend remains the authority; these checks exist to fail fast locally.

use crate::cart::ProductSnapshot;
use serde::{Deserialize, Serialize};

/// Outcome of an "add one unit" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartDecision {
    /// Proceed with the add/increment call.
    Allow,
    /// The product has no sellable units at all.
    RejectOutOfStock,
    /// One more unit would exceed stock; `available` is the remaining count
    /// to surface in the toast.
    RejectWouldExceedStock { available: i64 },
}

/// Decide whether incrementing a product's cart quantity by one may proceed.
///
/// `in_cart` is the quantity already in the cart for this product, zero if
/// absent. Callers re-fetch the cart first so `in_cart` is not stale local
/// state.
pub fn check_add_one(product: &ProductSnapshot, in_cart: i64) -> CartDecision {
    if product.stock < 1 {
        return CartDecision::RejectOutOfStock;
    }
    if in_cart >= product.stock {
        return CartDecision::RejectWouldExceedStock {
            available: product.stock,
        };
    }
    CartDecision::Allow
}

/// Outcome of editing a cart line's quantity directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityDecision {
    /// Submit the new quantity.
    Update(i64),
    /// Requested quantity is below one; the edit is dropped and the line
    /// keeps its current quantity.
    Ignore,
    /// The new quantity exceeds stock.
    RejectWouldExceedStock { available: i64 },
}

/// Decide what a +/- quantity edit on the cart page should do.
///
/// An edit below one is ignored rather than treated as removal; the cart
/// page has a separate explicit remove action.
pub fn check_set_quantity(product: &ProductSnapshot, requested: i64) -> QuantityDecision {
    if requested < 1 {
        return QuantityDecision::Ignore;
    }
    if requested > product.stock {
        return QuantityDecision::RejectWouldExceedStock {
            available: product.stock,
        };
    }
    QuantityDecision::Update(requested)
}
