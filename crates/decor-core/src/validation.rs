//! # Validation Module
//!
//! Turns raw client input into typed storefront values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Boundary parsing (THIS MODULE)                                │
//! │  ├── "orders"   → Tab::Orders         (NotAllowed otherwise)            │
//! │  ├── "vase"     → CategoryFilter      (NotAllowed otherwise)            │
//! │  └── "5", "-1"  → ProductId / quantity (InvalidFormat otherwise)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: StorefrontState                                               │
//! │  └── Product ids checked against the catalog (ProductNotFound)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use decor_core::validation::{parse_product_id, parse_quantity};
//!
//! assert_eq!(parse_product_id("5").unwrap().get(), 5);
//! assert!(parse_product_id("five").is_err());
//!
//! // Zero and negative quantities are valid input: they remove the line.
//! assert_eq!(parse_quantity("0").unwrap(), 0);
//! ```

use crate::error::ValidationError;
use crate::types::ProductId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a product id.
///
/// ## Rules
/// - Must not be empty
/// - Must be a non-negative integer that fits in `u32`
///
/// Existence in the catalog is checked later by the storefront.
pub fn parse_product_id(raw: &str) -> ValidationResult<ProductId> {
    let trimmed = required("product_id", raw)?;
    trimmed
        .parse::<u32>()
        .map(ProductId::new)
        .map_err(|e| ValidationError::InvalidFormat {
            field: "product_id".to_string(),
            reason: e.to_string(),
        })
}

/// Parses a requested cart quantity.
///
/// Any integer is accepted. Values below 1 are meaningful to
/// `update_quantity` (they remove the line), so no range is enforced here.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let trimmed = required("quantity", raw)?;
    trimmed
        .parse::<i64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: e.to_string(),
        })
}

// =============================================================================
// Enumerated Values
// =============================================================================

/// Parses `raw` as one of `values`, comparing case-insensitively against
/// each value's canonical name.
///
/// ## Example
/// ```rust
/// use decor_core::types::Tab;
/// use decor_core::validation::parse_enumerated;
///
/// let tab = parse_enumerated("tab", "Orders", &Tab::ALL, Tab::as_str).unwrap();
/// assert_eq!(tab, Tab::Orders);
/// assert!(parse_enumerated("tab", "cart", &Tab::ALL, Tab::as_str).is_err());
/// ```
pub fn parse_enumerated<T: Copy>(
    field: &str,
    raw: &str,
    values: &[T],
    name: impl Fn(&T) -> &'static str,
) -> ValidationResult<T> {
    let trimmed = required(field, raw)?;
    values
        .iter()
        .find(|value| name(*value).eq_ignore_ascii_case(trimmed))
        .copied()
        .ok_or_else(|| ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: values.iter().map(|v| name(v).to_string()).collect(),
        })
}

fn required<'a>(field: &str, raw: &'a str) -> ValidationResult<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(trimmed)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryFilter;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("1").unwrap(), ProductId::new(1));
        assert_eq!(parse_product_id(" 6 ").unwrap(), ProductId::new(6));

        assert!(matches!(
            parse_product_id(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_product_id("-1"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(parse_product_id("abc").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("-2").unwrap(), -2);
        assert!(parse_quantity("two").is_err());
        assert!(parse_quantity("   ").is_err());
    }

    #[test]
    fn test_parse_enumerated_lists_allowed_values() {
        let err = parse_enumerated(
            "category",
            "lamp",
            &CategoryFilter::ALL,
            CategoryFilter::as_str,
        )
        .unwrap_err();

        match err {
            ValidationError::NotAllowed { field, allowed } => {
                assert_eq!(field, "category");
                assert_eq!(allowed, vec!["all", "shelf", "panel", "vase", "sculpture"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_enumerated_ignores_case() {
        let filter = parse_enumerated(
            "category",
            "VASE",
            &CategoryFilter::ALL,
            CategoryFilter::as_str,
        )
        .unwrap();
        assert_eq!(filter, CategoryFilter::Vase);
    }
}
