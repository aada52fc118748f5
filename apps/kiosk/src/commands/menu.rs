//! # Menu Commands
//!
//! Commands for browsing the menu.

use serde::Serialize;
use tracing::debug;

use kiosk_core::{is_combo_eligible, is_customizable_item, ItemCategory, MenuCategory, MenuItem};

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// A menu item with what the item screen needs to know about it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemView {
    #[serde(flatten)]
    pub item: MenuItem,

    /// Price with currency symbol, e.g. "$5.99"
    pub price_display: String,

    pub category: ItemCategory,

    /// Offer the customization screen
    pub customizable: bool,

    /// Offer "make it a combo"
    pub combo_eligible: bool,
}

/// Gets the whole menu, grouped by category, in display order.
pub fn get_menu(catalog: &CatalogState) -> Vec<MenuCategory> {
    debug!("get_menu command");
    catalog.catalog().categories().to_vec()
}

/// Gets a single menu item.
///
/// ## Errors
/// NOT_FOUND for ids the menu does not contain.
pub fn get_menu_item(
    catalog: &CatalogState,
    config: &ConfigState,
    item_id: u32,
) -> Result<MenuItemView, ApiError> {
    debug!(item_id = %item_id, "get_menu_item command");

    let item = catalog.item(item_id)?;
    Ok(MenuItemView {
        price_display: config.format_currency(item.price_cents),
        category: item.category(),
        customizable: is_customizable_item(item_id),
        combo_eligible: is_combo_eligible(item_id),
        item,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use kiosk_core::MenuCatalog;

    #[test]
    fn test_get_menu() {
        let catalog = CatalogState::new(MenuCatalog::builtin());
        let menu = get_menu(&catalog);
        assert_eq!(menu.len(), 6);
        assert_eq!(menu[0].items[0].id, 101);
    }

    #[test]
    fn test_get_menu_item() {
        let catalog = CatalogState::new(MenuCatalog::builtin());
        let config = ConfigState::default();

        let view = get_menu_item(&catalog, &config, 201).unwrap();
        assert_eq!(view.price_display, "$6.99");
        assert_eq!(view.category, ItemCategory::Chicken);
        assert!(view.customizable);
        assert!(view.combo_eligible);

        let view = get_menu_item(&catalog, &config, 604).unwrap();
        assert!(view.customizable);
        assert!(!view.combo_eligible);

        let err = get_menu_item(&catalog, &config, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
