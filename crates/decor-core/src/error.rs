//! # Error Types
//!
//! Domain-specific error types for decor-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  decor-core errors (this file)                                          │
//! │  ├── CoreError        - Lookups against the catalog                     │
//! │  └── ValidationError  - Input parsing failures at the boundary          │
//! │                                                                         │
//! │  shell errors (apps/shell)                                              │
//! │  └── ApiError         - What a client sees (serialized)                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Client                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure falls into one of two kinds (see [`ErrorKind`]): a product
//! id that is not in the catalog, or an argument outside its allowed set.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification used by callers that only care about the category
/// of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced product does not exist in the catalog.
    NotFound,
    /// An argument is malformed or outside its enumerated set.
    InvalidArgument,
}

// =============================================================================
// Core Error
// =============================================================================

/// Storefront errors.
///
/// Mutations return these before touching any state, so a failed call
/// always leaves the storefront exactly as it was.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not part of the catalog.
    ///
    /// ## When This Occurs
    /// - A stale or mistyped id is passed to a cart or favorites mutation
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ProductNotFound(_) => ErrorKind::NotFound,
            CoreError::Validation(_) => ErrorKind::InvalidArgument,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning raw client input (tab names, category names,
/// numeric ids) into typed values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required argument is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. a product id that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
