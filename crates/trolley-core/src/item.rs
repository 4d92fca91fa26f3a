//! # Cart Line Item
//!
//! One product's entry in the cart, with its own quantity and bounds.
//!
//! ## Frozen-At-Add Semantics
//! Everything on a line item except `quantity` is a snapshot taken when the
//! product was first added:
//!
//! - `unit_price` is locked in, so a mid-session catalog price change never
//!   silently reprices a cart the shopper has already reviewed.
//! - `max_quantity` is the purchase ceiling the catalog reported at add time
//!   and stays authoritative for the lifetime of the line. A later add of the
//!   same product carries its own ceiling; that incoming ceiling is IGNORED
//!   on merge, which guards against stale catalog data overriding an
//!   established bound.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// One line of the cart: a product reference plus the quantity the shopper
/// wants to purchase.
///
/// ## Invariants (maintained by [`Cart`](crate::cart::Cart))
/// - `1 <= quantity <= max_quantity`
/// - `max_quantity >= 1`
/// - at most one line per `product_id` in a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    /// Product identifier. The identity key within the cart.
    pub product_id: u64,

    /// Display name at time of adding (frozen, informational only).
    pub title: String,

    /// Price per unit at time of adding (frozen).
    pub unit_price: Money,

    /// Opaque reference to the product image (display only).
    pub image_ref: String,

    /// Units of this product in the cart.
    pub quantity: u32,

    /// Purchase ceiling reported by the catalog at add time (frozen).
    pub max_quantity: u32,

    /// When this line was created.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Creates a new line item with an add-time timestamp.
    ///
    /// The raw constructor does not clamp; the cart aggregate normalizes on
    /// insert and the store facade validates before that. Keeping the
    /// constructor dumb lets tests build deliberately out-of-range input.
    pub fn new(
        product_id: u64,
        title: impl Into<String>,
        unit_price: Money,
        image_ref: impl Into<String>,
        quantity: u32,
        max_quantity: u32,
    ) -> Self {
        CartLineItem {
            product_id,
            title: title.into(),
            unit_price,
            image_ref: image_ref.into(),
            quantity,
            max_quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(i64::from(self.quantity))
    }

    /// True when the quantity has reached the purchase ceiling.
    ///
    /// The UI uses this to disable the "+" stepper.
    #[inline]
    pub fn at_ceiling(&self) -> bool {
        self.quantity >= self.max_quantity
    }

    /// True when the quantity is at the floor of 1.
    ///
    /// The UI uses this to disable the "−" stepper; going below 1 is never
    /// allowed, removal is a separate explicit action.
    #[inline]
    pub fn at_floor(&self) -> bool {
        self.quantity <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: u32, max_quantity: u32) -> CartLineItem {
        CartLineItem::new(
            7,
            "Headphones",
            Money::from_cents(2599),
            "images/headphones.png",
            quantity,
            max_quantity,
        )
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line(3, 5).line_total(), Money::from_cents(7797));
        assert_eq!(line(1, 5).line_total(), Money::from_cents(2599));
    }

    #[test]
    fn test_bounds_flags() {
        assert!(line(5, 5).at_ceiling());
        assert!(!line(4, 5).at_ceiling());
        assert!(line(1, 5).at_floor());
        assert!(!line(2, 5).at_floor());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(line(2, 5)).unwrap();
        assert_eq!(json["productId"], 7);
        assert_eq!(json["maxQuantity"], 5);
        assert!(json["unitPrice"].is_number());
    }
}
