//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Product      │   │    CartLine     │   │     Order       │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id             │   │  product_id     │   │  id             │        │
//! │  │  name, price    │   │  quantity ≥ 1   │   │  date, total    │        │
//! │  │  category       │   └─────────────────┘   │  items          │        │
//! │  └─────────────────┘                         └─────────────────┘        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Category     │   │ CategoryFilter  │   │      Tab        │        │
//! │  │  shelf, panel   │   │  all + Category │   │  catalog        │        │
//! │  │  vase,sculpture │   │                 │   │  favorites      │        │
//! │  └─────────────────┘   └─────────────────┘   │  orders,profile │        │
//! │                                              └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Product` and `Order` borrow `'static` strings: they only ever come from
//! the seed data in [`crate::catalog`] and are never built at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Product Id
// =============================================================================

/// Identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_product_id(s)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shelf,
    Panel,
    Vase,
    Sculpture,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Shelf => "shelf",
            Category::Panel => "panel",
            Category::Vase => "vase",
            Category::Sculpture => "sculpture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The category selection driving the catalog view.
///
/// `All` shows the whole catalog; every other variant mirrors a
/// [`Category`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Shelf,
    Panel,
    Vase,
    Sculpture,
}

impl CategoryFilter {
    /// Filters in the order the category bar shows them.
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Shelf,
        CategoryFilter::Panel,
        CategoryFilter::Vase,
        CategoryFilter::Sculpture,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Shelf => "shelf",
            CategoryFilter::Panel => "panel",
            CategoryFilter::Vase => "vase",
            CategoryFilter::Sculpture => "sculpture",
        }
    }

    /// The single category this filter selects, or `None` for `All`.
    pub const fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Shelf => Some(Category::Shelf),
            CategoryFilter::Panel => Some(Category::Panel),
            CategoryFilter::Vase => Some(Category::Vase),
            CategoryFilter::Sculpture => Some(Category::Sculpture),
        }
    }

    /// Whether a product of `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        self.category().map_or(true, |selected| selected == category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_enumerated(
            "category",
            s,
            &CategoryFilter::ALL,
            CategoryFilter::as_str,
        )
    }
}

// =============================================================================
// Tab
// =============================================================================

/// Top-level navigation tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Catalog,
    Favorites,
    Orders,
    Profile,
}

impl Tab {
    /// Tabs in navigation bar order.
    pub const ALL: [Tab; 4] = [Tab::Catalog, Tab::Favorites, Tab::Orders, Tab::Profile];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Tab::Catalog => "catalog",
            Tab::Favorites => "favorites",
            Tab::Orders => "orders",
            Tab::Profile => "profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_enumerated("tab", s, &Tab::ALL, Tab::as_str)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name shown on cards and in the cart.
    pub name: &'static str,

    /// Price in whole currency units.
    pub price: Money,

    pub category: Category,

    /// Image URI, resolved by the presentation layer.
    pub image: &'static str,

    pub description: &'static str,
}

// =============================================================================
// Order
// =============================================================================

/// A past order shown in the order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: &'static str,
    /// Pre-formatted display date.
    pub date: &'static str,
    pub total: Money,
    /// Number of items in the order.
    pub items: u32,
}

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct product in the cart.
///
/// ## Invariants
/// - At most one line per `product_id`
/// - `quantity >= 1`; reducing below 1 removes the line instead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A cart line joined with its catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct<'a> {
    pub product: &'a Product,
    pub quantity: i64,
}

impl CartProduct<'_> {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Presentation Metadata
// =============================================================================

/// A category bar entry: filter value, label and icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: CategoryFilter,
    pub label: &'static str,
    pub icon: &'static str,
}

/// A navigation bar entry: tab value, label and icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabOption {
    pub id: Tab,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The static profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub menu: &'static [ProfileMenuItem],
}

/// One row of the profile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileMenuItem {
    pub label: &'static str,
    pub icon: &'static str,
}

// =============================================================================
// Summary
// =============================================================================

/// Snapshot of the header badges and current selection.
///
/// Returned after every mutation so a client can refresh its chrome
/// without asking for each projection separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSummary {
    pub active_tab: Tab,
    pub selected_category: CategoryFilter,
    pub favorite_count: usize,
    pub cart_line_count: usize,
    pub cart_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Tab::default(), Tab::Catalog);
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Vase));
        assert!(CategoryFilter::Vase.matches(Category::Vase));
        assert!(!CategoryFilter::Vase.matches(Category::Panel));
    }

    #[test]
    fn test_category_filter_names_its_category() {
        assert_eq!(CategoryFilter::All.category(), None);
        for filter in &CategoryFilter::ALL[1..] {
            let category = filter.category().unwrap();
            assert_eq!(filter.as_str(), category.as_str());
        }
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("orders".parse::<Tab>().unwrap(), Tab::Orders);
        assert_eq!(" Profile ".parse::<Tab>().unwrap(), Tab::Profile);
        assert!("checkout".parse::<Tab>().is_err());
    }

    #[test]
    fn test_category_filter_from_str() {
        assert_eq!(
            "sculpture".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Sculpture
        );
        let err = "lamp".parse::<CategoryFilter>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for tab in Tab::ALL {
            let json = serde_json::to_string(&tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.as_str()));
        }
        for filter in CategoryFilter::ALL {
            let json = serde_json::to_string(&filter).unwrap();
            assert_eq!(json, format!("\"{}\"", filter.as_str()));
        }
    }

    #[test]
    fn test_cart_line_serializes_camel_case() {
        let line = CartLine {
            product_id: ProductId::new(2),
            quantity: 3,
        };
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"productId":2,"quantity":3}"#);
    }
}
