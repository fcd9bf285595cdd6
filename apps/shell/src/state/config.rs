//! # Configuration State
//!
//! Stores shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`DECOR_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup; commands borrow it shared.

use decor_core::Money;
use serde::Serialize;

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the page header
    pub store_name: String,

    /// Currency symbol appended to display amounts
    pub currency_symbol: String,

    /// Separator between digit groups ("24 500")
    pub group_separator: String,

    /// Pretty-print JSON responses (one response may span several lines)
    pub pretty: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "DÉCOR"
    /// - Currency: ₽, digits grouped by a space
    /// - Compact JSON, one response per line
    fn default() -> Self {
        ConfigState {
            store_name: "DÉCOR".to_string(),
            currency_symbol: "₽".to_string(),
            group_separator: " ".to_string(),
            pretty: false,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `DECOR_STORE_NAME`: Override store name
    /// - `DECOR_CURRENCY_SYMBOL`: Override currency symbol
    /// - `DECOR_GROUP_SEPARATOR`: Override digit group separator
    /// - `DECOR_PRETTY`: `1`, `true` or `yes` to pretty-print responses
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("DECOR_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("DECOR_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(separator) = lookup("DECOR_GROUP_SEPARATOR") {
            config.group_separator = separator;
        }

        if let Some(pretty) = lookup("DECOR_PRETTY") {
            config.pretty = matches!(
                pretty.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }

        config
    }

    /// Formats an amount the way the storefront displays prices.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::Money;
    /// use decor_shell_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_amount(Money::from_units(24_500)), "24 500 ₽");
    /// ```
    pub fn format_amount(&self, amount: Money) -> String {
        let units = amount.units();
        let digits = units.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.group_separator);
            }
            grouped.push(ch);
        }

        format!(
            "{}{} {}",
            if units < 0 { "-" } else { "" },
            grouped,
            self.currency_symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_grouping() {
        let config = ConfigState::default();
        assert_eq!(config.format_amount(Money::from_units(0)), "0 ₽");
        assert_eq!(config.format_amount(Money::from_units(999)), "999 ₽");
        assert_eq!(config.format_amount(Money::from_units(19_900)), "19 900 ₽");
        assert_eq!(config.format_amount(Money::from_units(122_300)), "122 300 ₽");
        assert_eq!(
            config.format_amount(Money::from_units(1_234_567)),
            "1 234 567 ₽"
        );
    }

    #[test]
    fn test_format_amount_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_amount(Money::from_units(-5_000)), "-5 000 ₽");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(|key| match key {
            "DECOR_STORE_NAME" => Some("Décor Outlet".to_string()),
            "DECOR_CURRENCY_SYMBOL" => Some("RUB".to_string()),
            "DECOR_GROUP_SEPARATOR" => Some(",".to_string()),
            "DECOR_PRETTY" => Some("TRUE".to_string()),
            _ => None,
        });

        assert_eq!(config.store_name, "Décor Outlet");
        assert!(config.pretty);
        assert_eq!(config.format_amount(Money::from_units(48_900)), "48,900 RUB");
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
    }
}
