//! # Cart State
//!
//! Wraps the session's [`CartStore`].
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command may read or modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. A multi-session host runs sessions on different threads
//!
//! Each session owns its own `CartState`; carts are never shared across
//! sessions.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Kiosk Action             Command                 CartStore call        │
//! │  ────────────             ───────                 ──────────────        │
//! │                                                                         │
//! │  Tap menu item ──────────► add_to_cart() ───────► add_item(..)         │
//! │                                                                         │
//! │  +/- stepper ────────────► increment_item() ────► increment(id, idx)   │
//! │                                                                         │
//! │  Edit toppings ──────────► customize_line() ────► customize_line(..)   │
//! │                                                                         │
//! │  Pay ────────────────────► submit_order() ──────► snapshot + clear()   │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use kiosk_core::{CartStore, MenuCatalog};

/// Session-managed cart state.
///
/// ## Why Not RwLock?
/// Cart operations are short and most of them write. A RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<CartStore>>,
}

impl CartState {
    /// Creates a new empty cart priced against `catalog`.
    pub fn new(catalog: Arc<MenuCatalog>) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(CartStore::with_catalog(catalog))),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.formatted_total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        // A panic in another command cannot leave the store half-mutated:
        // every CartStore operation keeps its invariants before returning.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
