//! # Pricing Helper
//!
//! Customization cost math, consumed by the cart at add time.
//!
//! ```text
//! Classic Burger (catalog: $5.99)
//!   + Toppings: Bacon ($1.00), Cheese ($0.50)
//!   + Sauce: BBQ (Extra, $0.00)
//!   ─────────────────────────────
//!   line price: $7.49  ◄── computed once, frozen on the CartLine
//! ```

use std::sync::Arc;

use crate::catalog::MenuCatalog;
use crate::money::Money;
use crate::types::{Customization, MenuItem};

/// Prices items and customizations against a shared catalog.
#[derive(Debug, Clone)]
pub struct PricingHelper {
    catalog: Arc<MenuCatalog>,
}

impl PricingHelper {
    pub fn new(catalog: Arc<MenuCatalog>) -> Self {
        PricingHelper { catalog }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Catalog base price; zero when the id is unknown.
    pub fn base_item_price(&self, id: u32) -> Money {
        self.catalog.price_of(id).unwrap_or_default()
    }

    /// Sum of every selection's incremental price across all categories.
    ///
    /// ```rust
    /// use kiosk_core::pricing::PricingHelper;
    /// use kiosk_core::{Customization, Selection};
    ///
    /// let toppings = vec![Customization::new("Toppings", vec![
    ///     Selection::new("Bacon", 100),
    ///     Selection::new("Lettuce", 0),
    /// ])];
    /// assert_eq!(PricingHelper::customization_surcharge(&toppings).cents(), 100);
    /// ```
    pub fn customization_surcharge(customizations: &[Customization]) -> Money {
        customizations
            .iter()
            .flat_map(|c| c.selections.iter())
            .map(|s| s.price())
            .sum()
    }

    /// Unit price of a customized line.
    ///
    /// Starts from the catalog base price so an item that already carries a
    /// surcharge (re-customizing a line) is not charged twice. Items the
    /// catalog does not know keep their own price as the base.
    pub fn customized_price(&self, item: &MenuItem, customizations: &[Customization]) -> Money {
        self.base_price_or(item.id, item.price()) + Self::customization_surcharge(customizations)
    }

    /// Catalog base price, or `fallback` when the catalog does not know `id`.
    pub fn base_price_or(&self, id: u32, fallback: Money) -> Money {
        self.catalog.price_of(id).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Selection;

    fn helper() -> PricingHelper {
        PricingHelper::new(Arc::new(MenuCatalog::builtin()))
    }

    fn toppings(cents: &[i64]) -> Vec<Customization> {
        vec![Customization::new(
            "Toppings",
            cents
                .iter()
                .enumerate()
                .map(|(i, &c)| Selection::new(format!("Topping {}", i), c))
                .collect(),
        )]
    }

    #[test]
    fn test_base_item_price() {
        let pricing = helper();
        assert_eq!(pricing.base_item_price(101).cents(), 599);
        assert_eq!(pricing.base_item_price(999), Money::zero());
    }

    #[test]
    fn test_surcharge_sums_all_categories() {
        let mut custom = toppings(&[100, 50]);
        custom.push(Customization::new(
            "Sauce",
            vec![Selection::new("Ranch", 25)],
        ));
        custom.push(Customization::new("Cheese", vec![]));

        assert_eq!(PricingHelper::customization_surcharge(&custom).cents(), 175);
        assert_eq!(PricingHelper::customization_surcharge(&[]), Money::zero());
    }

    #[test]
    fn test_customized_price_uses_catalog_base() {
        let pricing = helper();
        let mut item = pricing.catalog().get(101).unwrap().clone();
        // a line that was already surcharged once
        item.price_cents = 699;

        let price = pricing.customized_price(&item, &toppings(&[100]));
        assert_eq!(price.cents(), 699);
    }

    #[test]
    fn test_customized_price_unknown_item_keeps_own_price() {
        let pricing = helper();
        let item = MenuItem {
            id: 950,
            name: "Seasonal Special".to_string(),
            description: String::new(),
            price_cents: 450,
            image: String::new(),
        };
        assert_eq!(pricing.customized_price(&item, &toppings(&[50])).cents(), 500);
    }
}
