//! # Commands Module
//!
//! All commands a client can invoke, one per [`Event`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (dispatch)
//! ├── navigation.rs  ◄─── Tabs, whole-screen view, summary
//! ├── catalog.rs     ◄─── Category filter, product grid
//! ├── favorites.rs   ◄─── Heart toggle, favorites tab
//! ├── cart.rs        ◄─── Cart sheet mutations and totals
//! ├── account.rs     ◄─── Orders and profile tabs
//! └── config.rs      ◄─── Configuration and help
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "add 2"                                                                │
//! │     │  Event::parse                                                     │
//! │     ▼                                                                   │
//! │  Event::Add(ProductId(2))                                               │
//! │     │  dispatch                                                         │
//! │     ▼                                                                   │
//! │  cart::add_to_cart(&mut storefront, id) -> CoreResult<CartChanged>      │
//! │     │  serde_json::to_value                                             │
//! │     ▼                                                                   │
//! │  {"productId":2,"quantity":1,"summary":{...}}                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands declare only the state they need: read-only commands borrow
//! `&StorefrontState`, mutations borrow `&mut StorefrontState`, and only
//! commands that format amounts take the `ConfigState`.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod navigation;

use serde_json::Value;

use crate::error::ApiError;
use crate::event::Event;
use crate::state::{ConfigState, StorefrontState};

/// Runs one event against the session state and serializes its response.
///
/// `Quit` answers with the final summary; ending the session is up to the
/// caller.
pub fn dispatch(
    event: Event,
    storefront: &mut StorefrontState,
    config: &ConfigState,
) -> Result<Value, ApiError> {
    let value = match event {
        Event::View => serde_json::to_value(navigation::get_view(storefront, config))?,
        Event::Tab(tab) => {
            serde_json::to_value(navigation::set_active_tab(storefront, config, tab))?
        }
        Event::Summary | Event::Quit => serde_json::to_value(navigation::get_summary(storefront))?,
        Event::Category(category) => serde_json::to_value(catalog::set_selected_category(
            storefront, config, category,
        ))?,
        Event::Catalog => serde_json::to_value(catalog::get_catalog(storefront, config))?,
        Event::Favorite(id) => serde_json::to_value(favorites::toggle_favorite(storefront, id)?)?,
        Event::Favorites => serde_json::to_value(favorites::get_favorites(storefront, config))?,
        Event::Add(id) => serde_json::to_value(cart::add_to_cart(storefront, id)?)?,
        Event::Remove(id) => serde_json::to_value(cart::remove_from_cart(storefront, id)?)?,
        Event::Quantity(id, quantity) => {
            serde_json::to_value(cart::update_quantity(storefront, id, quantity)?)?
        }
        Event::Cart => serde_json::to_value(cart::get_cart(storefront, config))?,
        Event::Orders => serde_json::to_value(account::get_orders(storefront, config))?,
        Event::Profile => serde_json::to_value(account::get_profile())?,
        Event::Config => serde_json::to_value(config::get_config(config))?,
        Event::Help => serde_json::to_value(config::get_help())?,
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use decor_core::{CategoryFilter, ProductId, Tab};

    fn run(storefront: &mut StorefrontState, event: Event) -> Result<Value, ApiError> {
        dispatch(event, storefront, &ConfigState::default())
    }

    #[test]
    fn test_dispatch_cart_total() {
        let mut storefront = StorefrontState::new();
        run(&mut storefront, Event::Add(ProductId::new(1))).unwrap();
        run(&mut storefront, Event::Add(ProductId::new(2))).unwrap();
        let last = run(&mut storefront, Event::Add(ProductId::new(2))).unwrap();
        assert_eq!(last["summary"]["cartTotal"], 122_300);

        let cart = run(&mut storefront, Event::Cart).unwrap();
        assert_eq!(cart["totalDisplay"], "122 300 ₽");
        assert_eq!(cart["lines"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_dispatch_category_then_view() {
        let mut storefront = StorefrontState::new();
        run(&mut storefront, Event::Category(CategoryFilter::Vase)).unwrap();

        let screen = run(&mut storefront, Event::View).unwrap();
        assert_eq!(screen["view"]["tab"], "catalog");
        let ids: Vec<_> = screen["view"]["content"]["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_dispatch_not_found() {
        let mut storefront = StorefrontState::new();
        let err = run(&mut storefront, Event::Favorite(ProductId::new(77))).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 77");
    }

    #[test]
    fn test_dispatch_tab() {
        let mut storefront = StorefrontState::new();
        let screen = run(&mut storefront, Event::Tab(Tab::Orders)).unwrap();
        assert_eq!(screen["view"]["tab"], "orders");
        assert_eq!(screen["view"]["content"]["orders"][0]["id"], "ORD-2024-001");
    }
}
