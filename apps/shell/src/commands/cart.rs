//! # Cart Commands
//!
//! Commands behind the cart sheet.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart     ┌──────────┐                            │
//! │  │  Empty   │──────────────────►│ In Cart  │◄──┐ add_to_cart (+1)       │
//! │  │  Cart    │                   │          │───┘ update_quantity (n≥1)  │
//! │  └──────────┘◄──────────────────└──────────┘                            │
//! │               remove_from_cart                                          │
//! │               update_quantity (n<1) on the last line                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sheet's "Оформить заказ" button has no behavior and no command.

use decor_core::{CartProduct, CoreResult, Money, ProductId, StorefrontState, StorefrontSummary};
use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// One row of the cart sheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: &'static str,
    pub image: &'static str,
    pub price: Money,
    pub price_display: String,
    pub quantity: i64,
    pub line_total: Money,
}

impl CartLineView {
    fn new(line: CartProduct<'static>, config: &ConfigState) -> Self {
        CartLineView {
            product_id: line.product.id,
            name: line.product.name,
            image: line.product.image,
            price: line.product.price,
            price_display: config.format_amount(line.product.price),
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Cart response including lines and total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    /// Badge count: distinct products in the cart
    pub line_count: usize,
    pub total: Money,
    pub total_display: String,
}

/// Result of a cart mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartChanged {
    pub product_id: ProductId,
    /// Quantity after the change, `None` when the product has no line
    pub quantity: Option<i64>,
    pub summary: StorefrontSummary,
}

impl CartChanged {
    fn new(storefront: &StorefrontState, product_id: ProductId) -> Self {
        CartChanged {
            product_id,
            quantity: storefront.cart_quantity(product_id),
            summary: storefront.summary(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(storefront: &StorefrontState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");

    let total = storefront.cart_total();
    CartResponse {
        lines: storefront
            .cart_products()
            .map(|line| CartLineView::new(line, config))
            .collect(),
        line_count: storefront.cart_line_count(),
        total,
        total_display: config.format_amount(total),
    }
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases by 1
/// - Not in cart: added as a new line with quantity 1
pub fn add_to_cart(
    storefront: &mut StorefrontState,
    product_id: ProductId,
) -> CoreResult<CartChanged> {
    debug!(product_id = %product_id, "add_to_cart command");

    storefront.add_to_cart(product_id)?;
    Ok(CartChanged::new(storefront, product_id))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity below 1: removes the line
/// - Product without a line: nothing changes
pub fn update_quantity(
    storefront: &mut StorefrontState,
    product_id: ProductId,
    quantity: i64,
) -> CoreResult<CartChanged> {
    debug!(product_id = %product_id, quantity = %quantity, "update_quantity command");

    storefront.update_quantity(product_id, quantity)?;
    Ok(CartChanged::new(storefront, product_id))
}

/// Removes a product's line from the cart.
pub fn remove_from_cart(
    storefront: &mut StorefrontState,
    product_id: ProductId,
) -> CoreResult<CartChanged> {
    debug!(product_id = %product_id, "remove_from_cart command");

    storefront.remove_from_cart(product_id)?;
    Ok(CartChanged::new(storefront, product_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_flow() {
        let config = ConfigState::default();
        let mut storefront = StorefrontState::new();

        add_to_cart(&mut storefront, ProductId::new(1)).unwrap();
        add_to_cart(&mut storefront, ProductId::new(2)).unwrap();
        let changed = add_to_cart(&mut storefront, ProductId::new(2)).unwrap();
        assert_eq!(changed.quantity, Some(2));
        assert_eq!(changed.summary.cart_line_count, 2);

        let cart = get_cart(&storefront, &config);
        assert_eq!(cart.total.units(), 122_300);
        assert_eq!(cart.total_display, "122 300 ₽");
        assert_eq!(cart.lines[1].line_total.units(), 97_800);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let mut storefront = StorefrontState::new();
        add_to_cart(&mut storefront, ProductId::new(6)).unwrap();

        let changed = update_quantity(&mut storefront, ProductId::new(6), 0).unwrap();
        assert_eq!(changed.quantity, None);
        assert_eq!(changed.summary.cart_line_count, 0);
        assert!(changed.summary.cart_total.is_zero());
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let mut storefront = StorefrontState::new();
        let changed = remove_from_cart(&mut storefront, ProductId::new(3)).unwrap();
        assert_eq!(changed.quantity, None);
    }

    #[test]
    fn test_unknown_product_is_error() {
        let mut storefront = StorefrontState::new();
        assert!(add_to_cart(&mut storefront, ProductId::new(7)).is_err());
        assert!(update_quantity(&mut storefront, ProductId::new(7), 3).is_err());
        assert!(remove_from_cart(&mut storefront, ProductId::new(7)).is_err());
    }

    #[test]
    fn test_empty_cart_response() {
        let cart = get_cart(&StorefrontState::new(), &ConfigState::default());
        assert!(cart.lines.is_empty());
        assert_eq!(cart.total_display, "0 ₽");
    }
}
