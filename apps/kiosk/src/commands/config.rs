//! # Config Commands
//!
//! Commands for retrieving terminal configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current terminal configuration.
///
/// ## When Used
/// - Front-end startup (store name in the header)
/// - Currency formatting
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_serializes_camel_case() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["storeName"], "Kiosk Dev Store");
        assert_eq!(json["currencySymbol"], "$");
        assert_eq!(json["orderNumberEnd"], 999);
    }
}
