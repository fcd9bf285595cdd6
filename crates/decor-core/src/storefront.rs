//! # Storefront State
//!
//! The view-model behind the storefront page.
//!
//! ## State and Projections
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    StorefrontState                                      │
//! │                                                                         │
//! │  Owned state                  Derived (recomputed on every call)        │
//! │  ───────────                  ──────────────────────────────────        │
//! │  active_tab         ──┐                                                 │
//! │  selected_category  ──┼────►  filtered_products()  (catalog order)      │
//! │  favorites          ──┼────►  favorite_products()  (catalog order)      │
//! │  cart               ──┴────►  cart_products()      (cart order)         │
//! │                               cart_total()                              │
//! │                                                                         │
//! │  Static, shared by reference: catalog, orders                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//! ```text
//! Tap heart ──────────► toggle_favorite(id) ──► insert or remove id
//! Tap "В корзину" ────► add_to_cart(id) ──────► new line or quantity + 1
//! Tap − / + ──────────► update_quantity(id, n) ► n < 1 removes the line
//! Tap trash ──────────► remove_from_cart(id) ─► line removed (if any)
//! Tap tab / category ─► set_active_tab / set_selected_category
//! ```
//!
//! Every mutation that names a product checks it against the catalog first
//! and returns [`CoreError::ProductNotFound`] without touching state if it
//! is unknown. A cart line can therefore never reference a missing product.
//!
//! Deserialized snapshots go through the same checks: a snapshot with an
//! unknown id, a duplicate entry or a quantity below 1 is rejected.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ORDERS, PRODUCTS};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{
    CartLine, CartProduct, CategoryFilter, Order, Product, ProductId, StorefrontSummary, Tab,
};

/// The storefront's mutable state.
///
/// ## Invariants
/// - `cart` holds at most one line per product id, each with quantity ≥ 1
/// - `favorites` holds each id at most once
/// - every id in `cart` and `favorites` is a catalog product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StorefrontSnapshot")]
pub struct StorefrontState {
    active_tab: Tab,
    selected_category: CategoryFilter,
    /// Favorite ids in the order they were added.
    favorites: Vec<ProductId>,
    /// Cart lines in the order they were first added.
    cart: Vec<CartLine>,
}

impl StorefrontState {
    /// Creates a storefront on the catalog tab with no filter, no
    /// favorites and an empty cart.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::{CategoryFilter, StorefrontState, Tab};
    ///
    /// let storefront = StorefrontState::new();
    /// assert_eq!(storefront.active_tab(), Tab::Catalog);
    /// assert_eq!(storefront.selected_category(), CategoryFilter::All);
    /// assert!(storefront.cart_lines().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    pub fn set_selected_category(&mut self, category: CategoryFilter) {
        self.selected_category = category;
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Adds the product to favorites, or removes it if already there.
    ///
    /// ## Returns
    /// `true` if the product is a favorite after the call.
    pub fn toggle_favorite(&mut self, product_id: ProductId) -> CoreResult<bool> {
        require_product(product_id)?;

        if let Some(pos) = self.favorites.iter().position(|id| *id == product_id) {
            self.favorites.remove(pos);
            Ok(false)
        } else {
            self.favorites.push(product_id);
            Ok(true)
        }
    }

    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.favorites.contains(&product_id)
    }

    /// Favorite ids in the order they were added.
    pub fn favorites(&self) -> &[ProductId] {
        &self.favorites
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of the product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended as a new line with quantity 1
    ///
    /// ## Returns
    /// The line's quantity after the call.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::{ProductId, StorefrontState};
    ///
    /// let mut storefront = StorefrontState::new();
    /// let vase = ProductId::new(1);
    ///
    /// storefront.add_to_cart(vase).unwrap();
    /// assert_eq!(storefront.add_to_cart(vase).unwrap(), 2);
    /// assert_eq!(storefront.cart_lines().len(), 1);
    /// ```
    pub fn add_to_cart(&mut self, product_id: ProductId) -> CoreResult<i64> {
        require_product(product_id)?;

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.saturating_add(1);
            return Ok(line.quantity);
        }

        self.cart.push(CartLine {
            product_id,
            quantity: 1,
        });
        Ok(1)
    }

    /// Removes the product's line from the cart.
    ///
    /// A product that is in the catalog but not in the cart is a no-op.
    ///
    /// ## Returns
    /// `true` if a line was removed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> CoreResult<bool> {
        require_product(product_id)?;

        let initial_len = self.cart.len();
        self.cart.retain(|line| line.product_id != product_id);
        Ok(self.cart.len() != initial_len)
    }

    /// Sets the quantity of the product's line.
    ///
    /// ## Behavior
    /// - `quantity < 1`: same as [`remove_from_cart`](Self::remove_from_cart)
    /// - Otherwise: absolute set, no upper bound
    /// - Product not in cart: nothing changes
    ///
    /// ## Returns
    /// The line's quantity after the call, `None` if the product has no line.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::{ProductId, StorefrontState};
    ///
    /// let mut storefront = StorefrontState::new();
    /// let panel = ProductId::new(2);
    ///
    /// storefront.add_to_cart(panel).unwrap();
    /// assert_eq!(storefront.update_quantity(panel, 5).unwrap(), Some(5));
    /// assert_eq!(storefront.update_quantity(panel, 0).unwrap(), None);
    /// assert!(storefront.cart_lines().is_empty());
    /// ```
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> CoreResult<Option<i64>> {
        if quantity < 1 {
            self.remove_from_cart(product_id)?;
            return Ok(None);
        }

        require_product(product_id)?;

        Ok(self.line_mut(product_id).map(|line| {
            line.quantity = quantity;
            line.quantity
        }))
    }

    /// Cart lines in the order they were first added.
    pub fn cart_lines(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn cart_quantity(&self, product_id: ProductId) -> Option<i64> {
        self.cart
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
    }

    /// Number of distinct products in the cart.
    pub fn cart_line_count(&self) -> usize {
        self.cart.len()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.cart
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }

    // =========================================================================
    // Derived Projections
    // =========================================================================

    /// Catalog products passing the selected category, in catalog order.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::{CategoryFilter, StorefrontState};
    ///
    /// let mut storefront = StorefrontState::new();
    /// storefront.set_selected_category(CategoryFilter::Vase);
    ///
    /// let ids: Vec<u32> = storefront
    ///     .filtered_products()
    ///     .map(|p| p.id.get())
    ///     .collect();
    /// assert_eq!(ids, vec![1, 5]);
    /// ```
    pub fn filtered_products(&self) -> impl Iterator<Item = &'static Product> + '_ {
        let filter = self.selected_category;
        PRODUCTS.iter().filter(move |p| filter.matches(p.category))
    }

    /// Favorite products, in catalog order (not the order they were added).
    pub fn favorite_products(&self) -> impl Iterator<Item = &'static Product> + '_ {
        PRODUCTS.iter().filter(move |p| self.is_favorite(p.id))
    }

    /// Cart lines joined with their products, in cart order.
    ///
    /// Every line references a catalog product, so each line yields one
    /// entry.
    pub fn cart_products(&self) -> impl Iterator<Item = CartProduct<'static>> + '_ {
        self.cart.iter().filter_map(|line| {
            catalog::find_product(line.product_id).map(|product| CartProduct {
                product,
                quantity: line.quantity,
            })
        })
    }

    /// Sum of price × quantity over all cart lines, saturating at
    /// `i64::MAX` units.
    pub fn cart_total(&self) -> Money {
        self.cart
            .iter()
            .map(|line| {
                catalog::find_product(line.product_id)
                    .map_or(Money::zero(), |p| p.price.multiply_quantity(line.quantity))
            })
            .sum()
    }

    /// Past orders. Read-only: nothing in the storefront creates orders.
    pub fn orders(&self) -> &'static [Order] {
        &ORDERS
    }

    /// The full catalog, in display order.
    pub fn catalog(&self) -> &'static [Product] {
        &PRODUCTS
    }

    /// Header badges and current selection in one snapshot.
    pub fn summary(&self) -> StorefrontSummary {
        StorefrontSummary {
            active_tab: self.active_tab,
            selected_category: self.selected_category,
            favorite_count: self.favorite_count(),
            cart_line_count: self.cart_line_count(),
            cart_total: self.cart_total(),
        }
    }
}

fn require_product(product_id: ProductId) -> CoreResult<&'static Product> {
    catalog::find_product(product_id).ok_or(CoreError::ProductNotFound(product_id))
}

// =============================================================================
// Snapshots
// =============================================================================

/// Unchecked wire form of [`StorefrontState`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorefrontSnapshot {
    #[serde(default)]
    active_tab: Tab,
    #[serde(default)]
    selected_category: CategoryFilter,
    #[serde(default)]
    favorites: Vec<ProductId>,
    #[serde(default)]
    cart: Vec<CartLine>,
}

impl TryFrom<StorefrontSnapshot> for StorefrontState {
    type Error = CoreError;

    fn try_from(snapshot: StorefrontSnapshot) -> CoreResult<Self> {
        let mut favorites = Vec::with_capacity(snapshot.favorites.len());
        for product_id in snapshot.favorites {
            require_product(product_id)?;
            if favorites.contains(&product_id) {
                return Err(invalid_snapshot("favorites", format!("{product_id} listed twice")));
            }
            favorites.push(product_id);
        }

        let mut cart: Vec<CartLine> = Vec::with_capacity(snapshot.cart.len());
        for line in snapshot.cart {
            require_product(line.product_id)?;
            if line.quantity < 1 {
                return Err(invalid_snapshot(
                    "cart",
                    format!("quantity of {} must be at least 1", line.product_id),
                ));
            }
            if cart.iter().any(|existing| existing.product_id == line.product_id) {
                return Err(invalid_snapshot(
                    "cart",
                    format!("{} has more than one line", line.product_id),
                ));
            }
            cart.push(line);
        }

        Ok(Self {
            active_tab: snapshot.active_tab,
            selected_category: snapshot.selected_category,
            favorites,
            cart,
        })
    }
}

fn invalid_snapshot(field: &str, reason: String) -> CoreError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason,
    }
    .into()
}

// =============================================================================
// Unit Tests
// =============================================================================
