//! # State Module
//!
//! Manages per-session state for the kiosk terminal.
//!
//! ## Why Multiple State Types?
//! Instead of one struct that every command reaches into, each concern
//! has its own state type and commands take only what they need:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ CatalogState │  │  CartState   │  │ ConfigState  │  │ OrderState │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │ Arc<Menu     │  │ Arc<Mutex<   │  │ store_name   │  │ next order │  │
//! │  │   Catalog>   │  │  CartStore>> │  │ currency     │  │ number     │  │
//! │  └──────┬───────┘  └──────▲───────┘  └──────────────┘  └────────────┘  │
//! │         └── shared ───────┘ (pricing)                                  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: read-only after load                                  │
//! │  • CartState: Arc<Mutex<T>> for exclusive access                       │
//! │  • ConfigState: read-only after initialization                         │
//! │  • OrderState: atomic counter                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod order;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::{ConfigState, MENU_FILE_NAME};
pub use order::OrderState;

use kiosk_core::MenuCatalog;
use tracing::debug;

/// Everything one kiosk session owns.
///
/// Built at the session boundary and passed by reference to the request
/// loop; there is no global cart.
#[derive(Debug)]
pub struct KioskSession {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub config: ConfigState,
    pub orders: OrderState,
}

impl KioskSession {
    /// Creates a session with an empty cart and a change logger attached.
    pub fn new(config: ConfigState, catalog: MenuCatalog) -> Self {
        let catalog = CatalogState::new(catalog);
        let cart = CartState::new(catalog.shared());
        let orders = OrderState::from_config(&config);

        cart.with_cart_mut(|c| {
            c.on_change(|change| debug!(?change, "cart updated"));
        });

        KioskSession {
            catalog,
            cart,
            config,
            orders,
        }
    }
}
