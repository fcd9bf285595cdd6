//! # Favorites Commands
//!
//! Toggling the heart on a product card and the favorites tab.

use decor_core::{CoreResult, ProductId, StorefrontState, StorefrontSummary};
use serde::Serialize;
use tracing::debug;

use super::catalog::ProductView;
use crate::state::ConfigState;

/// Favorites tab contents, in catalog order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub count: usize,
    pub products: Vec<ProductView>,
}

/// Result of a heart tap.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggled {
    pub product_id: ProductId,
    pub is_favorite: bool,
    pub summary: StorefrontSummary,
}

/// Lists favorite products.
pub fn get_favorites(storefront: &StorefrontState, config: &ConfigState) -> FavoritesResponse {
    debug!("get_favorites command");

    FavoritesResponse {
        count: storefront.favorite_count(),
        products: storefront
            .favorite_products()
            .map(|p| ProductView::new(p, storefront, config))
            .collect(),
    }
}

/// Toggles a product's favorite flag.
///
/// ## Errors
/// `NOT_FOUND` if the id is not in the catalog.
pub fn toggle_favorite(
    storefront: &mut StorefrontState,
    product_id: ProductId,
) -> CoreResult<FavoriteToggled> {
    debug!(product_id = %product_id, "toggle_favorite command");

    let is_favorite = storefront.toggle_favorite(product_id)?;
    Ok(FavoriteToggled {
        product_id,
        is_favorite,
        summary: storefront.summary(),
    })
}
