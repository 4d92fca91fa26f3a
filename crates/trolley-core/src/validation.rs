//! # Validation Module
//!
//! Input validation for line items entering the cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Steppers disabled at bounds                                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CartStore facade (trolley-store)                             │
//! │  └── THIS MODULE: reject malformed line items up front                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart aggregate (cart.rs)                                     │
//! │  └── Normalizing clamp, stays total even for bad input                 │
//! │                                                                         │
//! │  Defense in depth: reject where a caller can react, clamp where        │
//! │  an error would be worse than a corrected value.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::item::CartLineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product title. Anything longer is a data bug upstream.
pub const MAX_TITLE_LEN: usize = 200;

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be at least 1 (quantity 0 means "do not add")
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

/// Validates a purchase ceiling.
///
/// ## Rules
/// - Must be at least 1; a product that cannot be bought once has no
///   business reaching the cart
pub fn validate_max_quantity(max_quantity: u32) -> ValidationResult<()> {
    if max_quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "maxQuantity",
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items exist)
pub fn validate_unit_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "unitPrice",
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a product title.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required { field: "title" });
    }

    if title.len() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title",
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a fully-formed line item before it enters the cart.
///
/// This is the reject-style half of the malformed-input policy: the store
/// facade calls this and surfaces the error, while the aggregate itself
/// would merely clamp.
pub fn validate_line_item(item: &CartLineItem) -> ValidationResult<()> {
    validate_title(&item.title)?;
    validate_unit_price_cents(item.unit_price.cents())?;
    validate_max_quantity(item.max_quantity)?;
    validate_quantity(item.quantity)?;

    if item.quantity > item.max_quantity {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 1,
            max: i64::from(item.max_quantity),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
