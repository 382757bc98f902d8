//! Cart line types.

use crate::error::CommerceError;
use crate::ids::{AccountId, CartItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The product fields a cart line carries along.
///
/// The backend embeds a snapshot of the product document in each cart line;
/// `stock` here is as stale as the last cart fetch, which is why the add
/// handlers re-fetch the cart before reconciling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Stock count at snapshot time.
    pub stock: i64,
    /// Image URI.
    pub image: String,
}

/// A cart line persisted by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unique cart line identifier.
    pub id: CartItemId,
    /// Owning account.
    pub account_id: AccountId,
    /// Requested quantity. Invariant: `quantity >= 1`.
    pub quantity: i64,
    /// Embedded product snapshot.
    pub product: ProductSnapshot,
}

impl CartItem {
    /// Create a cart line.
    pub fn new(
        id: impl Into<CartItemId>,
        account_id: impl Into<AccountId>,
        quantity: i64,
        product: ProductSnapshot,
    ) -> Self {
        Self {
            id: id.into(),
            account_id: account_id.into(),
            quantity,
            product,
        }
    }

    /// Check domain invariants, as enforced at the decode boundary.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.quantity < 1 {
            return Err(CommerceError::InvalidQuantity(self.quantity));
        }
        if self.product.stock < 0 {
            return Err(CommerceError::Validation(format!(
                "negative stock {} in cart line {}",
                self.product.stock, self.id
            )));
        }
        Ok(())
    }

    /// Line total: unit price times quantity, checked.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}
