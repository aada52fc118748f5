//! # Domain Types
//!
//! Core domain types used throughout the kiosk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │  Customization  │   │    Selection    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (1xx..6xx)  │   │  category       │──►│  name           │       │
//! │  │  name           │   │  selections[]   │   │  price_cents    │       │
//! │  │  price_cents    │   └─────────────────┘   │  intensity_label│       │
//! │  └────────┬────────┘                         └─────────────────┘       │
//! │           │ frozen copy + quantity + customizations                    │
//! │           ▼                                                             │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartLine     │   │  ItemCategory   │   │  DiningOption   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  line_id (UUID) │   │  id / 100       │   │  DineIn         │       │
//! │  │  quantity ≥ 1   │   │  1 Burgers ...  │   │  ToGo           │       │
//! │  │  main_item_id   │   │  6 Combos       │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every cart line has:
//! - `line_id`: UUID v4, assigned at creation, never reused
//! - `id`: the menu item id, shared by every line of the same item

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// An item on the menu. Owned by the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    /// Menu id. The hundreds digit encodes the category (see [`ItemCategory`]).
    pub id: u32,

    pub name: String,

    pub description: String,

    /// Base price in cents.
    pub price_cents: i64,

    /// Image path shown by the front-end.
    pub image: String,
}

impl MenuItem {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    #[inline]
    pub fn category(&self) -> ItemCategory {
        ItemCategory::from_item_id(self.id)
    }
}

// =============================================================================
// Customizations
// =============================================================================

/// One chosen modification inside a customization category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Selection {
    pub name: String,

    /// Incremental cost in cents. Missing in menu JSON means free.
    #[serde(default)]
    pub price_cents: i64,

    /// "Light" / "Regular" / "Extra", used by sauce selections only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_label: Option<String>,
}

impl Selection {
    /// Creates a selection without an intensity label.
    pub fn new(name: impl Into<String>, price_cents: i64) -> Self {
        Selection {
            name: name.into(),
            price_cents,
            intensity_label: None,
        }
    }

    /// Creates a sauce selection with an intensity label.
    pub fn with_intensity(name: impl Into<String>, price_cents: i64, intensity: SauceIntensity) -> Self {
        Selection {
            name: name.into(),
            price_cents,
            intensity_label: Some(intensity.label().to_string()),
        }
    }

    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A named group of selections, e.g. "Sauce" or "Toppings".
///
/// An empty `selections` list means the category was looked at but nothing
/// was picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customization {
    pub category: String,

    /// Display order is insertion order.
    #[serde(default)]
    pub selections: Vec<Selection>,
}

impl Customization {
    pub fn new(category: impl Into<String>, selections: Vec<Selection>) -> Self {
        Customization {
            category: category.into(),
            selections,
        }
    }
}

// =============================================================================
// Line Identifier
// =============================================================================

/// Stable identifier of a cart line.
///
/// Unlike the (menu id, index) pair, a `LineId` keeps pointing at the same
/// line while other lines are added or removed around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct LineId(Uuid);

impl LineId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        LineId(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        LineId::new()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LineId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(LineId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "lineId".to_string(),
                reason: "must be a valid UUID".to_string(),
            })
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart.
///
/// Uses the snapshot pattern: menu fields are copied at add time, and
/// `price_cents` already includes any customization surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub line_id: LineId,

    /// Menu item id (not unique within the cart).
    pub id: u32,

    pub name: String,

    pub description: String,

    /// Effective unit price in cents (base + surcharge, frozen at add time).
    pub price_cents: i64,

    /// Menu price in cents before any surcharge.
    pub base_price_cents: i64,

    pub image: String,

    /// Always ≥ 1 while the line exists.
    pub quantity: u32,

    /// `Some` marks a customized line, which never merges with anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Vec<Customization>>,

    #[serde(default)]
    pub is_combo_item: bool,

    /// Menu id of the combo's primary item. A relation, not ownership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_item_id: Option<u32>,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a plain line priced at the item's own price.
    pub fn from_menu_item(item: &MenuItem, quantity: u32) -> Self {
        CartLine {
            line_id: LineId::new(),
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price_cents: item.price_cents,
            base_price_cents: item.price_cents,
            image: item.image.clone(),
            quantity,
            customizations: None,
            is_combo_item: false,
            main_item_id: None,
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }

    /// True when this line can absorb a plain add of the same menu item.
    #[inline]
    pub fn is_mergeable(&self) -> bool {
        self.customizations.is_none()
    }
}

// =============================================================================
// Item Category
// =============================================================================

/// Menu category derived from `id / 100`.
///
/// Codes 1, 2 and 6 drive customization and combo rules. A new category
/// needs a code outside {1, 2, 6} or an explicit entry in both predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemCategory {
    Burgers,
    Chicken,
    Sides,
    Beverages,
    Desserts,
    Combos,
    Other(u32),
}

impl ItemCategory {
    pub fn from_item_id(id: u32) -> Self {
        match id / 100 {
            1 => ItemCategory::Burgers,
            2 => ItemCategory::Chicken,
            3 => ItemCategory::Sides,
            4 => ItemCategory::Beverages,
            5 => ItemCategory::Desserts,
            6 => ItemCategory::Combos,
            code => ItemCategory::Other(code),
        }
    }

    /// Burgers, chicken and combos open the customization screen.
    pub fn is_customizable(&self) -> bool {
        matches!(
            self,
            ItemCategory::Burgers | ItemCategory::Chicken | ItemCategory::Combos
        )
    }

    /// Only burgers and chicken can anchor a combo; a combo cannot.
    pub fn is_combo_eligible(&self) -> bool {
        matches!(self, ItemCategory::Burgers | ItemCategory::Chicken)
    }
}

/// Whether the item with this id can be customized.
///
/// ```rust
/// use kiosk_core::is_customizable_item;
///
/// assert!(is_customizable_item(205));
/// assert!(is_customizable_item(601));
/// assert!(!is_customizable_item(301));
/// ```
pub fn is_customizable_item(id: u32) -> bool {
    ItemCategory::from_item_id(id).is_customizable()
}

/// Whether the item with this id can anchor a combo.
///
/// ```rust
/// use kiosk_core::is_combo_eligible;
///
/// assert!(is_combo_eligible(101));
/// assert!(!is_combo_eligible(601));
/// ```
pub fn is_combo_eligible(id: u32) -> bool {
    ItemCategory::from_item_id(id).is_combo_eligible()
}

// =============================================================================
// Sauce Intensity
// =============================================================================

/// Sauce amount picked on the customization screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SauceIntensity {
    None,
    Light,
    Regular,
    Extra,
}

impl SauceIntensity {
    /// Maps the slider level (-1..=2) to an intensity. Anything else is `None`.
    pub fn from_level(level: i32) -> Self {
        match level {
            0 => SauceIntensity::Light,
            1 => SauceIntensity::Regular,
            2 => SauceIntensity::Extra,
            _ => SauceIntensity::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SauceIntensity::None => "None",
            SauceIntensity::Light => "Light",
            SauceIntensity::Regular => "Regular",
            SauceIntensity::Extra => "Extra",
        }
    }
}

// =============================================================================
// Dining Option
// =============================================================================

/// Where the customer will eat, chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum DiningOption {
    DineIn,
    ToGo,
}

impl DiningOption {
    pub fn label(&self) -> &'static str {
        match self {
            DiningOption::DineIn => "Dine In",
            DiningOption::ToGo => "To Go",
        }
    }

    /// Instructions printed on the order ticket.
    pub fn instructions(&self) -> &'static str {
        match self {
            DiningOption::DineIn => {
                "Please take a table number and find a seat. We will bring your order to your table."
            }
            DiningOption::ToGo => {
                "Please wait at the pickup counter. Your number will be called when your order is ready."
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
