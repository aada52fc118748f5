//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog and line-addressing failures           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Terminal API errors (in app)                                          │
//! │  └── ApiError         - What the kiosk front-end sees (serialized)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front-end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The (id, index) cart operations never return errors: a target that does
//! not resolve is a no-op. Errors only surface when loading a menu, when
//! validating raw input, and when a stable line id no longer exists.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu item id is not in the catalog.
    #[error("Menu item not found: {0}")]
    UnknownMenuItem(u32),

    /// Two catalog entries share the same id.
    ///
    /// ## When This Occurs
    /// - A hand-edited menu.json repeats an item id across categories
    #[error("Duplicate menu item id: {id}")]
    DuplicateMenuItem { id: u32 },

    /// A stable line id does not match any line in the cart.
    ///
    /// ## When This Occurs
    /// - The line was removed (quantity driven to zero, or cart cleared)
    ///   after the front-end rendered it
    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    /// Menu JSON could not be parsed.
    #[error("Invalid menu data: {0}")]
    MenuData(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
