//! Cart pricing with checked arithmetic.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::ids::CartItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Total for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    /// The cart line this total belongs to.
    pub cart_item_id: CartItemId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Unit price times quantity.
    pub total: Money,
}

/// Computed totals for a whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line totals, in cart order.
    pub line_totals: Vec<LineTotal>,
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Sum of quantities across lines.
    pub item_count: i64,
}

/// Price a cart.
///
/// All arithmetic is checked: i64 overflow surfaces as
/// [`CommerceError::Overflow`], mixed currencies as
/// [`CommerceError::CurrencyMismatch`]. An empty cart prices to a zero
/// subtotal in the given currency.
pub fn price_cart(items: &[CartItem], currency: Currency) -> Result<CartPricing, CommerceError> {
    let mut line_totals = Vec::with_capacity(items.len());
    let mut subtotal = Money::zero(currency);
    let mut item_count: i64 = 0;

    for item in items {
        if item.product.price.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: item.product.price.currency.code().to_string(),
            });
        }
        let total = item.line_total()?;
        subtotal = subtotal.try_add(&total).ok_or(CommerceError::Overflow)?;
        item_count = item
            .quantity
            .checked_add(item_count)
            .ok_or(CommerceError::Overflow)?;

        line_totals.push(LineTotal {
            cart_item_id: item.id.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            total,
        });
    }

    Ok(CartPricing {
        line_totals,
        subtotal,
        item_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ProductSnapshot;
    use crate::ids::ProductId;

    fn item(id: &str, price: i64, quantity: i64) -> CartItem {
        CartItem::new(
            id,
            "acct-1",
            quantity,
            ProductSnapshot {
                id: ProductId::new("prod-1"),
                name: "Fuel Filter".to_string(),
                price: Money::vnd(price),
                stock: 99,
                image: String::new(),
            },
        )
    }

    #[test]
    fn test_price_empty_cart() {
        let pricing = price_cart(&[], Currency::VND).unwrap();
        assert!(pricing.line_totals.is_empty());
        assert!(pricing.subtotal.is_zero());
        assert_eq!(pricing.item_count, 0);
    }

    #[test]
    fn test_price_cart_subtotal() {
        let items = vec![item("line-1", 350_000, 2), item("line-2", 750_000, 1)];
        let pricing = price_cart(&items, Currency::VND).unwrap();

        assert_eq!(pricing.line_totals.len(), 2);
        assert_eq!(pricing.line_totals[0].total.amount, 700_000);
        assert_eq!(pricing.line_totals[1].total.amount, 750_000);
        assert_eq!(pricing.subtotal.amount, 1_450_000);
        assert_eq!(pricing.item_count, 3);
    }

    #[test]
    fn test_price_cart_overflow() {
        let items = vec![item("line-1", i64::MAX, 2)];
        assert!(matches!(
            price_cart(&items, Currency::VND),
            Err(CommerceError::Overflow)
        ));
    }

    #[test]
    fn test_price_cart_currency_mismatch() {
        let mut mixed = item("line-1", 1000, 1);
        mixed.product.price = Money::new(1000, Currency::USD);
        assert!(matches!(
            price_cart(&[mixed], Currency::VND),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
