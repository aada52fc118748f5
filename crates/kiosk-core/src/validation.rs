//! # Validation Module
//!
//! Input validation for menu data and raw kiosk input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end                                                    │
//! │  └── Quantity steppers, disabled buttons                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Terminal command (Rust)                                      │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: quantity range, cart size, menu file sanity          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartStore                                                    │
//! │  └── Structural invariants (quantity ≥ 1, no merge of customized)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart itself trusts its caller; these checks run before it is called.

use crate::error::ValidationError;
use crate::types::{Customization, MenuItem};
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item or category name.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
///
/// ```rust
/// use kiosk_core::validation::validate_name;
///
/// assert!(validate_name("name", "Classic Burger").is_ok());
/// assert!(validate_name("name", "  ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity for an add.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
///
/// Quantity *updates* go through [`validate_quantity_update`] instead.
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY as i64 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(qty as u32)
}

/// Validates a quantity update.
///
/// Zero or less passes through unchanged: it means "remove the line".
/// Positive values share the add limit.
///
/// ```rust
/// use kiosk_core::validation::validate_quantity_update;
///
/// assert_eq!(validate_quantity_update(0).unwrap(), 0);
/// assert_eq!(validate_quantity_update(99).unwrap(), 99);
/// assert!(validate_quantity_update(4_000_000_000).is_err());
/// ```
pub fn validate_quantity_update(qty: i64) -> ValidationResult<i64> {
    if qty <= 0 {
        return Ok(qty);
    }
    validate_quantity(qty).map(i64::from)
}

/// Validates a price in cents, from 0 (free items and toppings) up to
/// [`MAX_PRICE_CENTS`].
///
/// ```rust
/// use kiosk_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(599).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(5_000_000_000_000_000_000).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a menu item id. Ids start at 1; 0 is reserved.
pub fn validate_menu_item_id(id: u32) -> ValidationResult<()> {
    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a catalog entry before it is indexed.
pub fn validate_menu_item(item: &MenuItem) -> ValidationResult<()> {
    validate_menu_item_id(item.id)?;
    validate_name("name", &item.name)?;
    validate_price_cents(item.price_cents)?;
    Ok(())
}

/// Validates customizations coming from the front-end.
///
/// ## Rules
/// - Category names must not be empty
/// - Selection names must not be empty
/// - Selection prices must be within 0..=MAX_PRICE_CENTS
pub fn validate_customizations(customizations: &[Customization]) -> ValidationResult<()> {
    for customization in customizations {
        validate_name("category", &customization.category)?;
        for selection in &customization.selections {
            validate_name("selection", &selection.name)?;
            validate_price_cents(selection.price_cents)?;
        }
    }
    Ok(())
}

/// Validates that one more line fits in the cart.
pub fn validate_cart_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0,
            max: MAX_CART_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
