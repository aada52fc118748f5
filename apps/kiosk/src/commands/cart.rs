//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Submitted│       │
//! │  │  Cart    │     │          │     │  screen  │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                      submit_order         │
//! │                   update_cart_item                 (order.rs)           │
//! │                   customize_line                         │              │
//! │                        │                                 │              │
//! │                        ▼                                 ▼              │
//! │                   clear_cart ─────────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Targets are either `(itemId, index)`, with `index` counted among lines
//! sharing `itemId`, or a stable `lineId`. Misses on `(itemId, index)` are
//! silent no-ops; misses on `lineId` are NOT_FOUND errors.

use serde::Serialize;
use tracing::{debug, warn};

use kiosk_core::validation::{
    validate_cart_size, validate_customizations, validate_quantity, validate_quantity_update,
};
use kiosk_core::{is_combo_eligible, is_customizable_item, CartLine, CartStore, Customization, LineId, Money};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

/// A cart line with its display fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,

    /// e.g. "Toppings: Bacon • Sauce: BBQ (Extra)"; empty for plain lines
    pub customization_text: String,

    /// Formatted `price × quantity`
    pub line_total: String,

    /// Whether the front-end should offer the customize button
    pub customizable: bool,
}

impl CartLineView {
    pub fn new(line: CartLine, config: &ConfigState) -> Self {
        CartLineView {
            customization_text: line.customization_summary(),
            line_total: config.format_currency(line.line_total().cents()),
            customizable: is_customizable_item(line.id),
            line,
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    /// Two-decimal total, e.g. "12.98"
    pub total: String,
    /// Total with currency symbol, e.g. "$12.98"
    pub total_display: String,
}

impl CartResponse {
    pub fn build(cart: &CartStore, config: &ConfigState) -> Self {
        let total: Money = cart.total();
        CartResponse {
            lines: cart
                .lines()
                .into_iter()
                .map(|line| CartLineView::new(line, config))
                .collect(),
            item_count: cart.item_count(),
            total: total.to_decimal_string(),
            total_display: config.format_currency(total.cents()),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::build(c, config))
}

/// Adds a menu item to the cart.
///
/// ## Behavior
/// - No customizations: merges into an existing plain line of the item
/// - With customizations (even `[]`): always a new line, priced at the
///   catalog base plus every selection's surcharge
///
/// ## Arguments
/// * `item_id` - Menu item to add
/// * `quantity` - Units to add (default: 1, range 1-99)
/// * `customizations` - Only allowed for customizable items (1xx, 2xx, 6xx)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    item_id: u32,
    quantity: Option<i64>,
    customizations: Option<Vec<Customization>>,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, ?quantity, customized = customizations.is_some(), "add_to_cart command");

    let quantity = validate_quantity(quantity.unwrap_or(1))?;
    let item = catalog.item(item_id)?;

    if let Some(customizations) = &customizations {
        if !is_customizable_item(item_id) {
            warn!(item_id = %item_id, "customizations sent for non-customizable item");
            return Err(ApiError::validation(format!(
                "{} cannot be customized",
                item.name
            )));
        }
        validate_customizations(customizations)?;
    }

    cart.with_cart_mut(|c| {
        let appends = customizations.is_some() || c.mergeable_line(item_id).is_none();
        if appends {
            validate_cart_size(c.len())?;
        }
        c.add_item(&item, quantity, customizations);
        Ok(CartResponse::build(c, config))
    })
}

/// Adds one component line to a combo anchored on `main_item_id`.
///
/// ## Arguments
/// * `item_id` - The side or drink to add
/// * `main_item_id` - The burger or chicken item the combo is built around
/// * `included` - Component is covered by the combo price (line priced 0)
pub fn add_combo_component(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    item_id: u32,
    main_item_id: u32,
    included: bool,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, main_item_id = %main_item_id, included, "add_combo_component command");

    if !is_combo_eligible(main_item_id) {
        return Err(ApiError::validation(format!(
            "Item {} cannot anchor a combo",
            main_item_id
        )));
    }

    let mut item = catalog.item(item_id)?;
    if included {
        item.price_cents = 0;
    }

    cart.with_cart_mut(|c| {
        validate_cart_size(c.len())?;
        c.add_combo_component(&item, main_item_id);
        Ok(CartResponse::build(c, config))
    })
}

/// Sets the quantity of the line targeted by `(item_id, index)`.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Quantity above 99: VALIDATION_ERROR, cart unchanged
/// - No matching line: cart unchanged
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    item_id: u32,
    quantity: i64,
    index: Option<usize>,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, quantity = %quantity, ?index, "update_cart_item command");

    let quantity = validate_quantity_update(quantity)?;
    Ok(cart.with_cart_mut(|c| {
        c.update_quantity(item_id, quantity, index.unwrap_or(0));
        CartResponse::build(c, config)
    }))
}

/// Removes the line targeted by `(item_id, index)`.
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    item_id: u32,
    index: Option<usize>,
) -> CartResponse {
    debug!(item_id = %item_id, ?index, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(item_id, index.unwrap_or(0));
        CartResponse::build(c, config)
    })
}

/// The "+" stepper on a cart row.
pub fn increment_item(
    cart: &CartState,
    config: &ConfigState,
    item_id: u32,
    index: Option<usize>,
) -> CartResponse {
    debug!(item_id = %item_id, ?index, "increment_item command");

    cart.with_cart_mut(|c| {
        c.increment(item_id, index.unwrap_or(0));
        CartResponse::build(c, config)
    })
}

/// The "-" stepper on a cart row; at quantity 1 the row disappears.
pub fn decrement_item(
    cart: &CartState,
    config: &ConfigState,
    item_id: u32,
    index: Option<usize>,
) -> CartResponse {
    debug!(item_id = %item_id, ?index, "decrement_item command");

    cart.with_cart_mut(|c| {
        c.decrement(item_id, index.unwrap_or(0));
        CartResponse::build(c, config)
    })
}

/// Replaces a line's customizations and re-prices it.
pub fn customize_line(
    cart: &CartState,
    config: &ConfigState,
    line_id: &str,
    customizations: Option<Vec<Customization>>,
) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, "customize_line command");

    let line_id: LineId = line_id.parse()?;
    if let Some(customizations) = &customizations {
        validate_customizations(customizations)?;
    }

    cart.with_cart_mut(|c| {
        let item_id = c
            .line(line_id)
            .map(|l| l.id)
            .ok_or_else(|| ApiError::not_found("Cart line", &line_id.to_string()))?;
        if customizations.is_some() && !is_customizable_item(item_id) {
            return Err(ApiError::validation(format!(
                "Item {} cannot be customized",
                item_id
            )));
        }
        c.customize_line(line_id, customizations)?;
        Ok(CartResponse::build(c, config))
    })
}

/// Sets the quantity of a line by its stable id; `≤ 0` removes it.
pub fn update_line_quantity(
    cart: &CartState,
    config: &ConfigState,
    line_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, quantity = %quantity, "update_line_quantity command");

    let line_id: LineId = line_id.parse()?;
    let quantity = validate_quantity_update(quantity)?;
    cart.with_cart_mut(|c| {
        c.set_line_quantity(line_id, quantity)?;
        Ok(CartResponse::build(c, config))
    })
}

/// Removes a line by its stable id.
pub fn remove_line(
    cart: &CartState,
    config: &ConfigState,
    line_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, "remove_line command");

    let line_id: LineId = line_id.parse()?;
    cart.with_cart_mut(|c| {
        c.remove_line(line_id)?;
        Ok(CartResponse::build(c, config))
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - Customer taps "Start over"
/// - Idle timeout on the kiosk
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::build(c, config)
    })
}
