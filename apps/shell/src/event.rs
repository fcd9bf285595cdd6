//! # Input Events
//!
//! Parses one line of client input into a typed [`Event`].
//!
//! ```text
//! "quantity 2 0"
//!      │
//!      ▼
//! verb = "quantity", args = ["2", "0"]
//!      │
//!      ▼
//! Event::Quantity(ProductId(2), 0)
//! ```
//!
//! Verbs are case-insensitive. Blank lines and `#` comments parse to
//! `None` and produce no response.

use decor_core::validation::{parse_product_id, parse_quantity};
use decor_core::{CategoryFilter, ProductId, Tab, ValidationError};

use crate::error::ApiError;

/// A single user-initiated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    View,
    Tab(Tab),
    Category(CategoryFilter),
    Catalog,
    Favorite(ProductId),
    Favorites,
    Add(ProductId),
    Remove(ProductId),
    Quantity(ProductId, i64),
    Cart,
    Orders,
    Profile,
    Summary,
    Config,
    Help,
    Quit,
}

/// Verbs with their argument synopsis, as listed by `help`.
pub const VERBS: [(&str, &str); 16] = [
    ("view", "render the active tab"),
    ("tab <catalog|favorites|orders|profile>", "switch tab"),
    ("category <all|shelf|panel|vase|sculpture>", "filter the catalog"),
    ("catalog", "list the filtered catalog"),
    ("favorite <id>", "toggle a favorite"),
    ("favorites", "list favorite products"),
    ("add <id>", "add one unit to the cart"),
    ("remove <id>", "remove a product from the cart"),
    ("quantity <id> <n>", "set a cart quantity (n < 1 removes)"),
    ("cart", "show the cart and its total"),
    ("orders", "show the order history"),
    ("profile", "show the profile screen"),
    ("summary", "badge counts and current selection"),
    ("config", "show the effective configuration"),
    ("help", "this list"),
    ("quit", "end the session (also: exit)"),
];

impl Event {
    /// Parses a raw input line.
    ///
    /// ## Returns
    /// - `Ok(None)` for blank lines and comments
    /// - `Ok(Some(event))` for a well-formed command
    /// - `Err(ApiError)` for unknown verbs or bad arguments
    pub fn parse(line: &str) -> Result<Option<Event>, ApiError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let event = match verb.as_str() {
            "view" => no_args(&args, Event::View)?,
            "tab" => Event::Tab(one_arg(&args, "tab")?.parse()?),
            "category" => Event::Category(one_arg(&args, "category")?.parse()?),
            "catalog" => no_args(&args, Event::Catalog)?,
            "favorite" => Event::Favorite(parse_product_id(one_arg(&args, "product_id")?)?),
            "favorites" => no_args(&args, Event::Favorites)?,
            "add" => Event::Add(parse_product_id(one_arg(&args, "product_id")?)?),
            "remove" => Event::Remove(parse_product_id(one_arg(&args, "product_id")?)?),
            "quantity" => {
                let [id, qty] = two_args(&args, "product_id", "quantity")?;
                Event::Quantity(parse_product_id(id)?, parse_quantity(qty)?)
            }
            "cart" => no_args(&args, Event::Cart)?,
            "orders" => no_args(&args, Event::Orders)?,
            "profile" => no_args(&args, Event::Profile)?,
            "summary" => no_args(&args, Event::Summary)?,
            "config" => no_args(&args, Event::Config)?,
            "help" => no_args(&args, Event::Help)?,
            "quit" | "exit" => Event::Quit,
            other => return Err(ApiError::unknown_command(other)),
        };

        Ok(Some(event))
    }
}

fn no_args(args: &[&str], event: Event) -> Result<Event, ApiError> {
    match args.first() {
        None => Ok(event),
        Some(extra) => Err(unexpected(extra)),
    }
}

fn one_arg<'a>(args: &[&'a str], field: &str) -> Result<&'a str, ApiError> {
    match args {
        [] => Err(missing(field)),
        [value] => Ok(*value),
        [_, extra, ..] => Err(unexpected(extra)),
    }
}

fn two_args<'a>(args: &[&'a str], first: &str, second: &str) -> Result<[&'a str; 2], ApiError> {
    match args {
        [] => Err(missing(first)),
        [_] => Err(missing(second)),
        [a, b] => Ok([*a, *b]),
        [_, _, extra, ..] => Err(unexpected(extra)),
    }
}

fn missing(field: &str) -> ApiError {
    ValidationError::Required {
        field: field.to_string(),
    }
    .into()
}

fn unexpected(extra: &str) -> ApiError {
    ApiError::invalid_argument(format!("unexpected argument: {}", extra))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn parse(line: &str) -> Event {
        Event::parse(line).unwrap().unwrap()
    }

    fn parse_err(line: &str) -> ErrorCode {
        Event::parse(line).unwrap_err().code
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(parse("view"), Event::View);
        assert_eq!(parse("  CART "), Event::Cart);
        assert_eq!(parse("exit"), Event::Quit);
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(parse("tab orders"), Event::Tab(Tab::Orders));
        assert_eq!(
            parse("category Vase"),
            Event::Category(CategoryFilter::Vase)
        );
        assert_eq!(parse("add 3"), Event::Add(ProductId::new(3)));
        assert_eq!(
            parse("quantity 2 -1"),
            Event::Quantity(ProductId::new(2), -1)
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(Event::parse("").unwrap(), None);
        assert_eq!(Event::parse("   ").unwrap(), None);
        assert_eq!(Event::parse("# add 1").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_err("checkout"), ErrorCode::UnknownCommand);
        assert_eq!(parse_err("tab cart"), ErrorCode::InvalidArgument);
        assert_eq!(parse_err("category lamp"), ErrorCode::InvalidArgument);
        assert_eq!(parse_err("add"), ErrorCode::InvalidArgument);
        assert_eq!(parse_err("add one"), ErrorCode::InvalidArgument);
        assert_eq!(parse_err("add 1 2"), ErrorCode::InvalidArgument);
        assert_eq!(parse_err("quantity 1"), ErrorCode::InvalidArgument);
        assert_eq!(parse_err("cart now"), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_missing_argument_message() {
        let err = Event::parse("quantity 4").unwrap_err();
        assert_eq!(err.message, "quantity is required");
    }

    #[test]
    fn test_help_lists_every_verb_once() {
        let listed: Vec<&str> = VERBS
            .iter()
            .map(|(synopsis, _)| synopsis.split(' ').next().unwrap_or_default())
            .collect();
        for verb in &listed {
            let sample = match *verb {
                "tab" => "tab profile".to_string(),
                "category" => "category shelf".to_string(),
                "favorite" | "add" | "remove" => format!("{verb} 1"),
                "quantity" => "quantity 1 2".to_string(),
                other => other.to_string(),
            };
            assert!(Event::parse(&sample).unwrap().is_some(), "{sample}");
        }

        let mut unique = listed.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), VERBS.len());
    }
}
