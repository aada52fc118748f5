//! # Menu Catalog
//!
//! The static, read-only source of truth for item names and base prices.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuCatalog                                                            │
//! │                                                                         │
//! │  categories: [Burgers, Chicken, Sides, Beverages, Desserts, Combos]     │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │  index: id ──► (category position, item position)                       │
//! │                                                                         │
//! │  Loaded once at startup (built-in or menu.json), then shared behind     │
//! │  an Arc. Nothing in the cart ever mutates it.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;
use crate::validation::{validate_menu_item, validate_name};

/// A menu section as shown in the category carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuCategory {
    pub id: u32,

    /// Display name, e.g. "Burgers".
    pub category: String,

    pub icon: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub items: Vec<MenuItem>,
}

/// Indexed, validated menu.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    categories: Vec<MenuCategory>,
    index: HashMap<u32, (usize, usize)>,
}

impl MenuCatalog {
    /// Builds a catalog, validating every item and rejecting duplicate ids.
    pub fn from_categories(categories: Vec<MenuCategory>) -> CoreResult<Self> {
        let mut index = HashMap::new();

        for (cat_pos, category) in categories.iter().enumerate() {
            validate_name("category", &category.category)?;

            for (item_pos, item) in category.items.iter().enumerate() {
                validate_menu_item(item)?;
                if index.insert(item.id, (cat_pos, item_pos)).is_some() {
                    return Err(CoreError::DuplicateMenuItem { id: item.id });
                }
            }
        }

        Ok(MenuCatalog { categories, index })
    }

    /// Parses a JSON array of categories.
    ///
    /// ```rust
    /// use kiosk_core::catalog::MenuCatalog;
    ///
    /// let json = r#"[{"id":3,"category":"Sides","icon":"🍟","items":[
    ///     {"id":301,"name":"French Fries","description":"Crispy golden fries",
    ///      "priceCents":299,"image":"/images/fries.jpg"}]}]"#;
    /// let catalog = MenuCatalog::from_json(json).unwrap();
    /// assert_eq!(catalog.price_of(301).unwrap().cents(), 299);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let categories: Vec<MenuCategory> = serde_json::from_str(json)?;
        Self::from_categories(categories)
    }

    /// The standard kiosk menu.
    pub fn builtin() -> Self {
        let categories = builtin_categories();
        let index = categories
            .iter()
            .enumerate()
            .flat_map(|(cat_pos, category)| {
                category
                    .items
                    .iter()
                    .enumerate()
                    .map(move |(item_pos, item)| (item.id, (cat_pos, item_pos)))
            })
            .collect();
        MenuCatalog { categories, index }
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.index
            .get(&id)
            .map(|&(cat_pos, item_pos)| &self.categories[cat_pos].items[item_pos])
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: u32) -> CoreResult<&MenuItem> {
        self.get(id).ok_or(CoreError::UnknownMenuItem(id))
    }

    /// Base price of an item, if the catalog knows it.
    pub fn price_of(&self, id: u32) -> Option<Money> {
        self.get(id).map(MenuItem::price)
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        MenuCatalog::builtin()
    }
}

// =============================================================================
// Built-in Menu
// =============================================================================

fn item(id: u32, name: &str, description: &str, price_cents: i64, image: &str) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        image: image.to_string(),
    }
}

fn category(id: u32, name: &str, icon: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        id,
        category: name.to_string(),
        icon: icon.to_string(),
        image_url: None,
        items,
    }
}

fn builtin_categories() -> Vec<MenuCategory> {
    vec![
        category(
            1,
            "Burgers",
            "🍔",
            vec![
                item(
                    101,
                    "Classic Burger",
                    "Beef patty with lettuce, tomato, and special sauce",
                    599,
                    "/images/logo.png",
                ),
                item(
                    102,
                    "Cheese Burger",
                    "Beef patty with American cheese, lettuce, tomato, and special sauce",
                    699,
                    "/images/logo.png",
                ),
                item(
                    103,
                    "Double Burger",
                    "Two beef patties with lettuce, tomato, and special sauce",
                    799,
                    "/images/logo.png",
                ),
                item(
                    104,
                    "Bacon Deluxe",
                    "Beef patty with crispy bacon, cheddar cheese, and BBQ sauce",
                    849,
                    "/images/logo.png",
                ),
                item(
                    105,
                    "Mushroom Swiss",
                    "Beef patty with sautéed mushrooms and Swiss cheese",
                    799,
                    "/images/logo.png",
                ),
                item(
                    106,
                    "Veggie Burger",
                    "Plant-based patty with fresh vegetables and vegan mayo",
                    749,
                    "/images/logo.png",
                ),
            ],
        ),
        category(
            2,
            "Chicken",
            "🍗",
            vec![
                item(
                    201,
                    "Crispy Chicken Sandwich",
                    "Crispy breaded chicken breast with lettuce and mayo",
                    699,
                    "/images/chicken/chicken sandwich1.jpg",
                ),
                item(
                    202,
                    "Grilled Chicken Sandwich",
                    "Grilled chicken breast with lettuce, tomato, and honey mustard",
                    749,
                    "/images/chicken/grilled chicken sandwich1.jpg",
                ),
                item(
                    203,
                    "Spicy Chicken Sandwich",
                    "Spicy breaded chicken with jalapeños and spicy sauce",
                    749,
                    "/images/chicken/spicy chicken sandwich1.jpg",
                ),
                item(
                    204,
                    "Chicken Tenders",
                    "Four pieces of crispy chicken tenders with dipping sauce",
                    649,
                    "/images/chicken/chicken tenders2.jpg",
                ),
            ],
        ),
        category(
            3,
            "Sides",
            "🍟",
            vec![
                item(
                    301,
                    "French Fries",
                    "Crispy golden fries",
                    299,
                    "/images/sides/french fries1.jpg",
                ),
                item(
                    302,
                    "Onion Rings",
                    "Crispy battered onion rings",
                    399,
                    "/images/sides/onion rings1.jpg",
                ),
                item(
                    303,
                    "Sweet Potato Fries",
                    "Crispy sweet potato fries",
                    349,
                    "/images/sides/sweet potato fries1.jpg",
                ),
                item(
                    304,
                    "Mozzarella Sticks",
                    "Breaded mozzarella sticks with marinara sauce",
                    499,
                    "/images/mozzarella-sticks.jpg",
                ),
                item(
                    305,
                    "Side Salad",
                    "Fresh garden salad with choice of dressing",
                    349,
                    "/images/side-salad.jpg",
                ),
            ],
        ),
        category(
            4,
            "Beverages",
            "🥤",
            vec![
                item(
                    401,
                    "Fountain Soda",
                    "Your choice of soft drink",
                    199,
                    "/images/cappuccino2.jpg",
                ),
                item(
                    402,
                    "Milkshake",
                    "Creamy vanilla, chocolate, or strawberry",
                    399,
                    "/images/milkshake1.jpg",
                ),
                item(403, "Iced Tea", "Freshly brewed iced tea", 199, "/images/milkshake2.jpg"),
                item(
                    404,
                    "Bottled Water",
                    "Purified bottled water",
                    149,
                    "/images/cappuccino2.jpg",
                ),
                item(405, "Coffee", "Fresh brewed hot coffee", 199, "/images/milkshake1.jpg"),
            ],
        ),
        category(
            5,
            "Desserts",
            "🍦",
            vec![
                item(
                    501,
                    "Ice Cream Cone",
                    "Vanilla, chocolate, or swirl soft serve",
                    249,
                    "/images/logo.png.jpg",
                ),
                item(
                    502,
                    "Chocolate Chip Cookie",
                    "Freshly baked chocolate chip cookie",
                    149,
                    "/images/logo.png.jpg",
                ),
                item(503, "Apple Pie", "Warm apple pie with cinnamon", 299, "/images/logo.png.jpg"),
                item(
                    504,
                    "Sundae",
                    "Vanilla ice cream with chocolate sauce and a cherry",
                    349,
                    "/images/logo.png.jpg",
                ),
            ],
        ),
        category(
            6,
            "Combos",
            "🍱",
            vec![
                item(
                    601,
                    "Burger Combo",
                    "Classic burger with fries and a drink",
                    899,
                    "/images/logo.png",
                ),
                item(
                    602,
                    "Chicken Combo",
                    "Crispy chicken sandwich with fries and a drink",
                    949,
                    "/images/logo.png",
                ),
                item(
                    603,
                    "Family Pack",
                    "4 burgers, 4 fries, and 4 drinks",
                    2499,
                    "/images/logo.png",
                ),
                item(
                    604,
                    "Kids Meal",
                    "Small burger, small fries, small drink, and a toy",
                    599,
                    "/images/logo.png",
                ),
            ],
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemCategory;

    #[test]
    fn test_builtin_lookup() {
        let catalog = MenuCatalog::builtin();
        assert_eq!(catalog.len(), 28);
        assert_eq!(catalog.categories().len(), 6);

        let burger = catalog.get(101).unwrap();
        assert_eq!(burger.name, "Classic Burger");
        assert_eq!(catalog.price_of(101), Some(Money::from_cents(599)));
        assert_eq!(catalog.price_of(999), None);
    }

    #[test]
    fn test_builtin_passes_validation() {
        let rebuilt = MenuCatalog::from_categories(builtin_categories()).unwrap();
        assert_eq!(rebuilt.len(), MenuCatalog::builtin().len());
    }

    #[test]
    fn test_builtin_ids_match_category_codes() {
        let catalog = MenuCatalog::builtin();
        for category in catalog.categories() {
            for item in &category.items {
                assert_eq!(item.id / 100, category.id, "{} misfiled", item.name);
            }
        }
        assert_eq!(catalog.get(601).unwrap().category(), ItemCategory::Combos);
    }

    #[test]
    fn test_require_unknown_item() {
        let catalog = MenuCatalog::builtin();
        assert!(catalog.require(204).is_ok());
        assert!(matches!(
            catalog.require(999),
            Err(CoreError::UnknownMenuItem(999))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let categories = vec![
            category(1, "Burgers", "🍔", vec![item(101, "A", "", 100, "")]),
            category(9, "Specials", "⭐", vec![item(101, "B", "", 200, "")]),
        ];
        assert!(matches!(
            MenuCatalog::from_categories(categories),
            Err(CoreError::DuplicateMenuItem { id: 101 })
        ));
    }

    #[test]
    fn test_invalid_item_rejected() {
        let categories = vec![category(3, "Sides", "🍟", vec![item(301, "Fries", "", -5, "")])];
        assert!(matches!(
            MenuCatalog::from_categories(categories),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 4, "category": "Beverages", "icon": "🥤", "items": [
                {"id": 401, "name": "Fountain Soda", "description": "Soft drink",
                 "priceCents": 199, "image": "/images/soda.jpg"}
            ]}
        ]"#;
        let catalog = MenuCatalog::from_json(json).unwrap();
        assert_eq!(catalog.get(401).unwrap().name, "Fountain Soda");
        assert_eq!(catalog.items().count(), 1);

        assert!(matches!(
            MenuCatalog::from_json("{ nope"),
            Err(CoreError::MenuData(_))
        ));
    }
}
