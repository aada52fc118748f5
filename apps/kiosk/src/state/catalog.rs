//! # Catalog State
//!
//! The menu loaded at startup, shared read-only by every command and by
//! the cart's pricing helper.

use std::sync::Arc;

use kiosk_core::{MenuCatalog, MenuItem};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<MenuCatalog>,
}

impl CatalogState {
    pub fn new(catalog: MenuCatalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// A handle for collaborators that keep the catalog (the cart's pricing).
    pub fn shared(&self) -> Arc<MenuCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Looks up an item; unknown ids become a NOT_FOUND error.
    pub fn item(&self, id: u32) -> Result<MenuItem, ApiError> {
        Ok(self.catalog.require(id)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_item_lookup() {
        let state = CatalogState::new(MenuCatalog::builtin());
        assert_eq!(state.item(204).unwrap().name, "Chicken Tenders");

        let err = state.item(777).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Menu item not found: 777");
    }
}
