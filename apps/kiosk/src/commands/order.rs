//! # Order Commands
//!
//! Turning the cart into an order ticket.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Submission                                     │
//! │                                                                         │
//! │  submit_order { diningOption: "to-go" }                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Cart empty? ──── yes ──► CART_ERROR                                    │
//! │         │ no                                                            │
//! │         ▼                                                               │
//! │  Take next order number (OrderState)                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Build OrderTicket from the cart lines                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Clear the cart ──► ticket returned to the front-end                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart lock is held across all three steps, so a ticket always
//! matches the cart that was cleared.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use kiosk_core::DiningOption;

use crate::commands::cart::CartLineView;
use crate::error::ApiError;
use crate::state::{CartState, ConfigState, OrderState};

/// What the confirmation screen shows after checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTicket {
    pub order_number: u32,
    pub store_name: String,
    pub dining_option: DiningOption,
    /// "Dine In" / "To Go"
    pub dining_label: String,
    /// Where to wait for the order
    pub instructions: String,
    /// Shown as "about N minutes" on the confirmation screen
    pub estimated_wait_minutes: u32,
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub total: String,
    pub total_display: String,
    pub submitted_at: DateTime<Utc>,
}

/// Submits the current cart as an order and empties the cart.
///
/// ## Errors
/// CART_ERROR when the cart has no lines.
pub fn submit_order(
    cart: &CartState,
    config: &ConfigState,
    orders: &OrderState,
    dining_option: DiningOption,
) -> Result<OrderTicket, ApiError> {
    debug!(?dining_option, "submit_order command");

    cart.with_cart_mut(|c| {
        if c.is_empty() {
            return Err(ApiError::cart("Cannot submit an empty order"));
        }

        let total = c.total();
        let item_count = c.item_count();
        let ticket = OrderTicket {
            order_number: orders.next_order_number(),
            store_name: config.store_name.clone(),
            dining_option,
            dining_label: dining_option.label().to_string(),
            instructions: dining_option.instructions().to_string(),
            estimated_wait_minutes: config.estimate_wait_minutes(item_count),
            lines: c
                .lines()
                .into_iter()
                .map(|line| CartLineView::new(line, config))
                .collect(),
            item_count,
            total: total.to_decimal_string(),
            total_display: config.format_currency(total.cents()),
            submitted_at: Utc::now(),
        };

        info!(
            order_number = ticket.order_number,
            item_count = ticket.item_count,
            total = %ticket.total,
            dining = ticket.dining_label.as_str(),
            wait_minutes = ticket.estimated_wait_minutes,
            "Order submitted"
        );

        c.clear();
        Ok(ticket)
    })
}
