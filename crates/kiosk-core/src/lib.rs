//! # kiosk-core: Pure Ordering Logic for the Restaurant Kiosk
//!
//! This crate is the **heart** of the kiosk. It holds the cart domain model
//! and every rule about it, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kiosk Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front-end (out of process)                      │   │
//! │  │    Menu carousel ──► Customize ──► Cart ──► Checkout            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON lines                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kiosk-terminal commands                      │   │
//! │  │    add_to_cart, update_cart_item, submit_order, etc.            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │ catalog  │ │ pricing  │ │   cart   │ │  format  │          │   │
//! │  │   │ MenuItem │ │ surcharge│ │CartStore │ │ "Sauce:" │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Customization, CartLine, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Read-only menu lookup
//! - [`pricing`] - Customization surcharge math
//! - [`cart`] - The cart store and its change notifications
//! - [`format`] - Customization display text
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use kiosk_core::{CartStore, Customization, MenuCatalog, Selection};
//!
//! let catalog = Arc::new(MenuCatalog::builtin());
//! let burger = catalog.get(101).unwrap().clone();
//! let mut cart = CartStore::with_catalog(catalog);
//!
//! cart.add_item(&burger, 1, None);
//! cart.add_item(&burger, 1, Some(vec![Customization::new(
//!     "Toppings",
//!     vec![Selection::new("Bacon", 100)],
//! )]));
//!
//! assert_eq!(cart.len(), 2);
//! assert_eq!(cart.formatted_total(), "12.98"); // 5.99 + 6.99
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod format;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartChange, CartSnapshot, CartStore, SubscriptionId};
pub use catalog::{MenuCatalog, MenuCategory};
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::format_customizations;
pub use money::Money;
pub use pricing::PricingHelper;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of lines in one cart.
///
/// Enforced by the terminal before adds; the store itself does not refuse.
pub const MAX_CART_LINES: usize = 50;

/// Maximum units a single add or quantity update may request.
pub const MAX_ITEM_QUANTITY: u32 = 99;

/// Highest accepted menu or selection price, in cents ($10,000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000;
