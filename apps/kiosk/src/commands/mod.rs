//! # Commands Module
//!
//! All commands the kiosk front-end can send over the request loop.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── Menu listing and item details
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── order.rs    ◄─── Order submission
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Kiosk Command Flow                                   │
//! │                                                                         │
//! │  Front-end writes one JSON object per line:                             │
//! │  {"command":"add_to_cart","itemId":101,"quantity":2}                    │
//! │         │                                                               │
//! │         │ (stdin)                                                       │
//! │         ▼                                                               │
//! │  request::dispatch                                                      │
//! │  ──────────────────                                                     │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &CatalogState,  ◄── From the session                     │
//! │      cart: &CartState,        ◄── From the session                     │
//! │      config: &ConfigState,    ◄── From the session                     │
//! │      item_id: u32,            ◄── From the request                     │
//! │      quantity: Option<i64>,   ◄── Optional field                       │
//! │      ...                                                                │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (stdout)                                                      │
//! │         ▼                                                               │
//! │  {"ok":{"lines":[...],"itemCount":2,"total":"11.98",...}}               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs.

pub mod cart;
pub mod config;
pub mod menu;
pub mod order;
