//! # Navigation Commands
//!
//! Tab switching and rendering whatever the active tab shows.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DÉCOR                                        ♥ 2     🛍 3              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Каталог │ Избранное │ Заказы │ Профиль      ◄── tab <name>             │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  view ──► Screen { header, tabs, active tab's content }                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use decor_core::catalog::TAB_OPTIONS;
use decor_core::{Profile, StorefrontState, StorefrontSummary, Tab, TabOption};
use serde::Serialize;
use tracing::debug;

use super::account::{self, OrdersResponse};
use super::catalog::{self, CatalogResponse};
use super::favorites::{self, FavoritesResponse};
use crate::state::ConfigState;

/// Content of the active tab.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "tab", content = "content", rename_all = "lowercase")]
pub enum TabContent {
    Catalog(CatalogResponse),
    Favorites(FavoritesResponse),
    Orders(OrdersResponse),
    Profile(&'static Profile),
}

/// A whole page: header, navigation and the active tab.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub store_name: String,
    pub tabs: &'static [TabOption],
    pub summary: StorefrontSummary,
    pub view: TabContent,
}

/// Renders the active tab.
pub fn get_view(storefront: &StorefrontState, config: &ConfigState) -> Screen {
    debug!(tab = %storefront.active_tab(), "get_view command");

    let view = match storefront.active_tab() {
        Tab::Catalog => TabContent::Catalog(catalog::get_catalog(storefront, config)),
        Tab::Favorites => TabContent::Favorites(favorites::get_favorites(storefront, config)),
        Tab::Orders => TabContent::Orders(account::get_orders(storefront, config)),
        Tab::Profile => TabContent::Profile(account::get_profile()),
    };

    Screen {
        store_name: config.store_name.clone(),
        tabs: &TAB_OPTIONS,
        summary: storefront.summary(),
        view,
    }
}

/// Switches tab and renders it.
pub fn set_active_tab(storefront: &mut StorefrontState, config: &ConfigState, tab: Tab) -> Screen {
    debug!(tab = %tab, "set_active_tab command");

    storefront.set_active_tab(tab);
    get_view(storefront, config)
}

/// Header badges and current selection.
pub fn get_summary(storefront: &StorefrontState) -> StorefrontSummary {
    debug!("get_summary command");
    storefront.summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_core::ProductId;

    #[test]
    fn test_default_view_is_catalog() {
        let screen = get_view(&StorefrontState::new(), &ConfigState::default());
        assert!(matches!(screen.view, TabContent::Catalog(_)));
        assert_eq!(screen.store_name, "DÉCOR");
        assert_eq!(screen.tabs.len(), 4);
    }

    #[test]
    fn test_set_active_tab_renders_that_tab() {
        let config = ConfigState::default();
        let mut storefront = StorefrontState::new();
        storefront.toggle_favorite(ProductId::new(2)).unwrap();

        let screen = set_active_tab(&mut storefront, &config, Tab::Favorites);
        match screen.view {
            TabContent::Favorites(favorites) => assert_eq!(favorites.count, 1),
            other => panic!("unexpected view: {other:?}"),
        }
        assert_eq!(screen.summary.active_tab, Tab::Favorites);
    }

    #[test]
    fn test_tab_content_json_tagging() {
        let config = ConfigState::default();
        let mut storefront = StorefrontState::new();
        let screen = set_active_tab(&mut storefront, &config, Tab::Profile);

        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["view"]["tab"], "profile");
        assert_eq!(json["view"]["content"]["name"], "Гость");
        assert_eq!(json["summary"]["activeTab"], "profile");
    }
}
