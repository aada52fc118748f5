//! # Configuration State
//!
//! Stores terminal configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KIOSK_*`)
//! 2. `menu.json` in the platform config dir (menu only)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Name of the optional menu file in the platform config dir.
pub const MENU_FILE_NAME: &str = "menu.json";

/// Terminal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown on order tickets)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Explicit menu file; `None` means config dir, then built-in menu
    pub menu_path: Option<PathBuf>,

    /// First order number handed out, and the one after wrap-around
    pub order_number_start: u32,

    /// Last order number before wrapping back to the start
    pub order_number_end: u32,

    /// Wait estimate for a one-item order, in minutes
    pub wait_minutes_min: u32,

    /// Upper bound of the wait estimate, in minutes
    pub wait_minutes_max: u32,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Kiosk Dev Store"
    /// - Currency: $ with 2 decimals
    /// - Order numbers: 100-999
    /// - Wait estimate: 5-15 minutes
    fn default() -> Self {
        ConfigState {
            store_name: "Kiosk Dev Store".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            menu_path: None,
            order_number_start: 100,
            order_number_end: 999,
            wait_minutes_min: 5,
            wait_minutes_max: 15,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KIOSK_STORE_NAME`: Override store name
    /// - `KIOSK_CURRENCY_SYMBOL`: Override currency symbol
    /// - `KIOSK_MENU_PATH`: Load the menu from this JSON file
    /// - `KIOSK_ORDER_NUMBER_START` / `KIOSK_ORDER_NUMBER_END`: order number range
    /// - `KIOSK_WAIT_MINUTES_MIN` / `KIOSK_WAIT_MINUTES_MAX`: wait estimate range
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable numbers keep
    /// their defaults, and an inverted range is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("KIOSK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("KIOSK_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(path) = lookup("KIOSK_MENU_PATH") {
            if !path.trim().is_empty() {
                config.menu_path = Some(PathBuf::from(path));
            }
        }

        let start = lookup("KIOSK_ORDER_NUMBER_START").and_then(|s| s.trim().parse().ok());
        let end = lookup("KIOSK_ORDER_NUMBER_END").and_then(|s| s.trim().parse().ok());
        let start = start.unwrap_or(config.order_number_start);
        let end = end.unwrap_or(config.order_number_end);
        if start <= end {
            config.order_number_start = start;
            config.order_number_end = end;
        }

        let min = lookup("KIOSK_WAIT_MINUTES_MIN").and_then(|s| s.trim().parse().ok());
        let max = lookup("KIOSK_WAIT_MINUTES_MAX").and_then(|s| s.trim().parse().ok());
        let min = min.unwrap_or(config.wait_minutes_min);
        let max = max.unwrap_or(config.wait_minutes_max);
        if min <= max {
            config.wait_minutes_min = min;
            config.wait_minutes_max = max;
        }

        config
    }

    /// Estimated wait for an order of `item_count` units.
    ///
    /// The minimum covers one unit; each further unit adds a minute, up to
    /// the maximum.
    ///
    /// ```rust
    /// use kiosk_terminal::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.estimate_wait_minutes(1), 5);
    /// assert_eq!(config.estimate_wait_minutes(4), 8);
    /// assert_eq!(config.estimate_wait_minutes(40), 15);
    /// ```
    pub fn estimate_wait_minutes(&self, item_count: u32) -> u32 {
        self.wait_minutes_min
            .saturating_add(item_count.saturating_sub(1))
            .min(self.wait_minutes_max)
    }

    /// The menu file to load, if any.
    ///
    /// An explicit `menu_path` always wins; otherwise `menu.json` in the
    /// platform config dir is used when it exists.
    pub fn resolve_menu_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.menu_path {
            return Some(path.clone());
        }

        let dirs = ProjectDirs::from("com", "kiosk", "cart")?;
        let candidate = dirs.config_dir().join(MENU_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_terminal::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1298), "$12.98");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1298), "$12.98");
        assert_eq!(config.format_currency(5), "$0.05");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-599), "-$5.99");
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        let config = ConfigState::from_lookup(lookup_from(&[("KIOSK_CURRENCY_SYMBOL", "€")]));
        assert_eq!(config.format_currency(2499), "€24.99");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("KIOSK_STORE_NAME", "Downtown"),
            ("KIOSK_MENU_PATH", "/srv/kiosk/menu.json"),
            ("KIOSK_ORDER_NUMBER_START", "1"),
            ("KIOSK_ORDER_NUMBER_END", "50"),
        ]));
        assert_eq!(config.store_name, "Downtown");
        assert_eq!(config.menu_path, Some(PathBuf::from("/srv/kiosk/menu.json")));
        assert_eq!(config.resolve_menu_path(), config.menu_path);
        assert_eq!((config.order_number_start, config.order_number_end), (1, 50));
    }

    #[test]
    fn test_wait_estimate_range() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("KIOSK_WAIT_MINUTES_MIN", "10"),
            ("KIOSK_WAIT_MINUTES_MAX", "12"),
        ]));
        assert_eq!(config.estimate_wait_minutes(0), 10);
        assert_eq!(config.estimate_wait_minutes(2), 11);
        assert_eq!(config.estimate_wait_minutes(u32::MAX), 12);

        let inverted = ConfigState::from_lookup(lookup_from(&[
            ("KIOSK_WAIT_MINUTES_MIN", "30"),
            ("KIOSK_WAIT_MINUTES_MAX", "20"),
        ]));
        assert_eq!((inverted.wait_minutes_min, inverted.wait_minutes_max), (5, 15));
    }

    #[test]
    fn test_bad_order_range_keeps_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("KIOSK_ORDER_NUMBER_START", "900"),
            ("KIOSK_ORDER_NUMBER_END", "10"),
        ]));
        assert_eq!((config.order_number_start, config.order_number_end), (100, 999));

        let config = ConfigState::from_lookup(lookup_from(&[("KIOSK_ORDER_NUMBER_END", "abc")]));
        assert_eq!(config.order_number_end, 999);
    }
}
