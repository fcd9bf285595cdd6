//! # Catalog Commands
//!
//! The catalog tab: category bar and the filtered product grid.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [Все] [Полки] [Панно] [Вазы] [Скульптуры]   ◄── category <filter>      │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐                                      │
//! │  │ ♡            │ │ ♥            │   ◄── favorite <id>                  │
//! │  │ Serenity     │ │ Minimalist   │                                      │
//! │  │ 24 500 ₽     │ │ 19 900 ₽     │                                      │
//! │  │ [В корзину]  │ │ [В корзину]  │   ◄── add <id>                       │
//! │  └──────────────┘ └──────────────┘                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use decor_core::catalog::CATEGORY_OPTIONS;
use decor_core::{
    Category, CategoryFilter, CategoryOption, Money, Product, ProductId, StorefrontState,
};
use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// A product card as the client renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: &'static str,
    pub price: Money,
    pub price_display: String,
    pub category: Category,
    pub image: &'static str,
    pub description: &'static str,
    /// Drives the filled heart icon
    pub is_favorite: bool,
    /// Quantity already in the cart, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_quantity: Option<i64>,
}

impl ProductView {
    pub fn new(product: &'static Product, storefront: &StorefrontState, config: &ConfigState) -> Self {
        ProductView {
            id: product.id,
            name: product.name,
            price: product.price,
            price_display: config.format_amount(product.price),
            category: product.category,
            image: product.image,
            description: product.description,
            is_favorite: storefront.is_favorite(product.id),
            cart_quantity: storefront.cart_quantity(product.id),
        }
    }
}

/// Catalog tab contents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub selected_category: CategoryFilter,
    pub categories: &'static [CategoryOption],
    pub products: Vec<ProductView>,
}

/// Lists the catalog under the current category filter.
pub fn get_catalog(storefront: &StorefrontState, config: &ConfigState) -> CatalogResponse {
    debug!(category = %storefront.selected_category(), "get_catalog command");

    CatalogResponse {
        selected_category: storefront.selected_category(),
        categories: &CATEGORY_OPTIONS,
        products: storefront
            .filtered_products()
            .map(|p| ProductView::new(p, storefront, config))
            .collect(),
    }
}

/// Selects a category and returns the refreshed catalog.
pub fn set_selected_category(
    storefront: &mut StorefrontState,
    config: &ConfigState,
    category: CategoryFilter,
) -> CatalogResponse {
    debug!(category = %category, "set_selected_category command");

    storefront.set_selected_category(category);
    get_catalog(storefront, config)
}
