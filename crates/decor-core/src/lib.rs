//! # decor-core: Storefront View-Model
//!
//! This crate is the **heart** of the DÉCOR storefront. It owns the state a
//! presentation layer mutates (active tab, category filter, favorites, cart)
//! and derives everything the page renders from it, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DÉCOR Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    Presentation / Client                        │    │
//! │  │    Catalog ──► Favorites ──► Cart sheet ──► Orders ──► Profile  │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ one event per line                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                    apps/shell commands                          │    │
//! │  │    add_to_cart, toggle_favorite, set_active_tab, etc.           │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ decor-core (THIS CRATE) ★                       │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐   │    │
//! │  │   │   types   │  │  catalog  │  │ storefront │  │ validation│   │    │
//! │  │   │  Product  │  │ seed data │  │ cart, favs │  │  parsing  │   │    │
//! │  │   │  Tab, ... │  │  orders   │  │ projections│  │           │   │    │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘   │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK                          │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Tab, CategoryFilter, etc.)
//! - [`catalog`] - The static catalog, order history and screen metadata
//! - [`storefront`] - `StorefrontState`, its mutations and projections
//! - [`money`] - Whole-unit Money type
//! - [`error`] - Domain error types
//! - [`validation`] - Parsing raw input into typed values
//!
//! ## Example Usage
//!
//! ```rust
//! use decor_core::{ProductId, StorefrontState};
//!
//! let mut storefront = StorefrontState::new();
//!
//! storefront.add_to_cart(ProductId::new(1)).unwrap();
//! storefront.add_to_cart(ProductId::new(2)).unwrap();
//! storefront.add_to_cart(ProductId::new(2)).unwrap();
//!
//! // 24 500 + 2 × 48 900
//! assert_eq!(storefront.cart_total().units(), 122_300);
//!
//! // Unknown ids are rejected, state is untouched
//! assert!(storefront.add_to_cart(ProductId::new(42)).is_err());
//! assert_eq!(storefront.cart_line_count(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod storefront;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use money::Money;
pub use storefront::StorefrontState;
pub use types::*;
