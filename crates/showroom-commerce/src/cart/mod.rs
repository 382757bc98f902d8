//! Cart module.
//!
//! Cart lines as the backend returns them, the stock reconciler that gates
//! add-to-cart and quantity edits, and checked pricing over the whole cart.

mod item;
mod pricing;
mod reconcile;

pub use item::{CartItem, ProductSnapshot};
pub use pricing::{price_cart, CartPricing, LineTotal};
pub use reconcile::{check_add_one, check_set_quantity, CartDecision, QuantityDecision};
