//! # Request Loop
//!
//! The kiosk front-end talks to the terminal in JSON lines: one request
//! object per input line, one response object per output line.
//!
//! ```text
//! → {"command":"add_to_cart","itemId":101,"quantity":2}
//! ← {"ok":{"lines":[...],"itemCount":2,"total":"11.98","totalDisplay":"$11.98"}}
//!
//! → {"command":"remove_line","lineId":"not-a-uuid"}
//! ← {"error":{"code":"VALIDATION_ERROR","message":"lineId has invalid format: ..."}}
//! ```
//!
//! Blank lines are skipped. A malformed line gets a BAD_REQUEST response
//! and the loop keeps going.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use kiosk_core::{Customization, DiningOption};

use crate::commands::{cart, config, menu, order};
use crate::error::ApiError;
use crate::state::KioskSession;

/// One request line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    GetMenu,

    #[serde(rename_all = "camelCase")]
    GetMenuItem { item_id: u32 },

    GetCart,

    #[serde(rename_all = "camelCase")]
    AddToCart {
        item_id: u32,
        #[serde(default)]
        quantity: Option<i64>,
        #[serde(default)]
        customizations: Option<Vec<Customization>>,
    },

    #[serde(rename_all = "camelCase")]
    AddComboComponent {
        item_id: u32,
        main_item_id: u32,
        #[serde(default)]
        included: bool,
    },

    #[serde(rename_all = "camelCase")]
    UpdateCartItem {
        item_id: u32,
        quantity: i64,
        #[serde(default)]
        index: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    RemoveFromCart {
        item_id: u32,
        #[serde(default)]
        index: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    IncrementItem {
        item_id: u32,
        #[serde(default)]
        index: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    DecrementItem {
        item_id: u32,
        #[serde(default)]
        index: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    CustomizeLine {
        line_id: String,
        #[serde(default)]
        customizations: Option<Vec<Customization>>,
    },

    #[serde(rename_all = "camelCase")]
    UpdateLineQuantity { line_id: String, quantity: i64 },

    #[serde(rename_all = "camelCase")]
    RemoveLine { line_id: String },

    ClearCart,

    #[serde(rename_all = "camelCase")]
    SubmitOrder { dining_option: DiningOption },

    GetConfig,
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Response {
    Ok(Value),
    Error(ApiError),
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Error(err),
        }
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Could not encode response: {}", e)))
}

/// Routes a request to its command.
pub fn dispatch(session: &KioskSession, request: Request) -> Result<Value, ApiError> {
    let KioskSession {
        catalog,
        cart: cart_state,
        config: cfg,
        orders,
    } = session;

    match request {
        Request::GetMenu => to_value(menu::get_menu(catalog)),
        Request::GetMenuItem { item_id } => to_value(menu::get_menu_item(catalog, cfg, item_id)?),
        Request::GetCart => to_value(cart::get_cart(cart_state, cfg)),
        Request::AddToCart {
            item_id,
            quantity,
            customizations,
        } => to_value(cart::add_to_cart(
            catalog,
            cart_state,
            cfg,
            item_id,
            quantity,
            customizations,
        )?),
        Request::AddComboComponent {
            item_id,
            main_item_id,
            included,
        } => to_value(cart::add_combo_component(
            catalog,
            cart_state,
            cfg,
            item_id,
            main_item_id,
            included,
        )?),
        Request::UpdateCartItem {
            item_id,
            quantity,
            index,
        } => to_value(cart::update_cart_item(cart_state, cfg, item_id, quantity, index)?),
        Request::RemoveFromCart { item_id, index } => {
            to_value(cart::remove_from_cart(cart_state, cfg, item_id, index))
        }
        Request::IncrementItem { item_id, index } => {
            to_value(cart::increment_item(cart_state, cfg, item_id, index))
        }
        Request::DecrementItem { item_id, index } => {
            to_value(cart::decrement_item(cart_state, cfg, item_id, index))
        }
        Request::CustomizeLine {
            line_id,
            customizations,
        } => to_value(cart::customize_line(cart_state, cfg, &line_id, customizations)?),
        Request::UpdateLineQuantity { line_id, quantity } => to_value(
            cart::update_line_quantity(cart_state, cfg, &line_id, quantity)?,
        ),
        Request::RemoveLine { line_id } => to_value(cart::remove_line(cart_state, cfg, &line_id)?),
        Request::ClearCart => to_value(cart::clear_cart(cart_state, cfg)),
        Request::SubmitOrder { dining_option } => {
            to_value(order::submit_order(cart_state, cfg, orders, dining_option)?)
        }
        Request::GetConfig => to_value(config::get_config(cfg)),
    }
}

/// Parses and runs one request line.
pub fn handle_line(session: &KioskSession, line: &str) -> Response {
    let result = serde_json::from_str::<Request>(line)
        .map_err(ApiError::from)
        .and_then(|request| dispatch(session, request));

    if let Err(err) = &result {
        warn!(code = ?err.code, message = %err.message, "request failed");
    }
    result.into()
}

/// Runs the request loop until `reader` is exhausted.
pub fn serve<R, W>(session: &KioskSession, reader: R, mut writer: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(request = line, "request received");
        let response = handle_line(session, line);
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    debug!("input closed, stopping request loop");
    Ok(())
}
