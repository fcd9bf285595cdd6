//! # Account Commands
//!
//! The read-only orders and profile tabs.

use decor_core::catalog::PROFILE;
use decor_core::{Money, Profile, StorefrontState};
use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// One order card in the history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: &'static str,
    pub date: &'static str,
    pub items: u32,
    pub total: Money,
    pub total_display: String,
}

/// Orders tab contents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub orders: Vec<OrderView>,
}

/// Lists past orders.
pub fn get_orders(storefront: &StorefrontState, config: &ConfigState) -> OrdersResponse {
    debug!("get_orders command");

    OrdersResponse {
        orders: storefront
            .orders()
            .iter()
            .map(|order| OrderView {
                id: order.id,
                date: order.date,
                items: order.items,
                total: order.total,
                total_display: config.format_amount(order.total),
            })
            .collect(),
    }
}

/// The static guest profile.
pub fn get_profile() -> &'static Profile {
    debug!("get_profile command");
    &PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_orders() {
        let response = get_orders(&StorefrontState::new(), &ConfigState::default());
        assert_eq!(response.orders.len(), 1);
        assert_eq!(response.orders[0].total_display, "73 400 ₽");
        assert_eq!(response.orders[0].items, 2);
    }

    #[test]
    fn test_get_profile() {
        let profile = get_profile();
        assert_eq!(profile.email, "guest@example.com");
        assert_eq!(profile.menu.len(), 4);
    }
}
