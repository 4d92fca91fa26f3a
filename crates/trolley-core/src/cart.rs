//! # Cart Aggregate
//!
//! The in-memory cart: an ordered collection of line items, keyed by product
//! id, with every mutation a total function.
//!
//! ## Operation Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           Operation              State Change           │
//! │  ──────────────           ─────────              ────────────           │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_item() ──────────► merge or append       │
//! │                                                                         │
//! │  Tap "+" on a line ─────► increase_item() ─────► qty+1, stop at max    │
//! │                                                                         │
//! │  Tap "−" on a line ─────► decrease_item() ─────► qty−1, stop at 1      │
//! │                                                                         │
//! │  Tap trash icon ────────► remove_item() ───────► line removed          │
//! │                                                                         │
//! │  Order confirmed ───────► clear() ─────────────► back to empty         │
//! │                                                                         │
//! │  NOTE: Nothing here errors. Out-of-range taps and stale ids are        │
//! │        absorbed as no-ops; every operation reports whether it          │
//! │        actually changed state so callers can notify listeners.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The One Subtle Rule
//! When `add_item` merges into an existing line, the clamp ceiling is the
//! EXISTING line's `max_quantity`, never the incoming item's. The first add
//! establishes the bound for the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::item::CartLineItem;
use crate::money::Money;
use crate::QUANTITY_FLOOR;

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges)
/// - `1 <= quantity <= max_quantity` on every line, after every operation
/// - Insertion order is preserved for display; it carries no meaning for
///   totals
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    items: Vec<CartLineItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a line item, merging with an existing line for the same product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantities are summed, then clamped to the
    ///   existing line's `max_quantity`. The incoming item's ceiling, price,
    ///   and title are ignored; the first add froze them.
    /// - Product not in cart: the item is appended and its own ceiling
    ///   becomes authoritative. The quantity is normalized into
    ///   `[1, max_quantity]` so the aggregate stays total even for
    ///   out-of-contract input (ceiling floored at 1).
    ///
    /// ## Returns
    /// `true` if the cart changed. Merging quantity 0, or merging into a
    /// line already at its ceiling, changes nothing and returns `false`.
    pub fn add_item(&mut self, item: CartLineItem) -> bool {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            // Clamp to the ceiling recorded at first add, not the incoming
            // one. Saturating add: a u32::MAX request must not wrap below
            // the current quantity.
            let merged = existing
                .quantity
                .saturating_add(item.quantity)
                .min(existing.max_quantity);
            if merged == existing.quantity {
                return false;
            }
            existing.quantity = merged;
            return true;
        }

        let mut item = item;
        item.max_quantity = item.max_quantity.max(QUANTITY_FLOOR);
        item.quantity = item.quantity.clamp(QUANTITY_FLOOR, item.max_quantity);
        self.items.push(item);
        true
    }

    /// Removes the line for the given product id.
    ///
    /// Returns `true` if a line was removed; unknown ids are a no-op. A
    /// stale render firing remove twice must not be an error.
    pub fn remove_item(&mut self, product_id: u64) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != initial_len
    }

    /// Increments the quantity of a line by 1, stopping at its ceiling.
    ///
    /// Returns `true` if the quantity changed. At the ceiling or for an
    /// unknown id this is a no-op, never an error; the UI disables the "+"
    /// control at the bound, so this is a defensive backstop.
    pub fn increase_item(&mut self, product_id: u64) -> bool {
        match self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
        {
            Some(item) if item.quantity < item.max_quantity => {
                item.quantity += 1;
                true
            }
            _ => false,
        }
    }

    /// Decrements the quantity of a line by 1, stopping at the floor of 1.
    ///
    /// Decreasing to 0 is never allowed; removal is a distinct, explicit
    /// operation. Returns `true` if the quantity changed.
    pub fn decrease_item(&mut self, product_id: u64) -> bool {
        match self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
        {
            Some(item) if item.quantity > QUANTITY_FLOOR => {
                item.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Clears all lines, returning the cart to its initial empty state.
    ///
    /// Returns `true` if the cart had any lines.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        self.created_at = Utc::now();
        had_items
    }

    /// Calculates the total price: sum of `unit_price × quantity` over all
    /// lines.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Renders the total with two decimal places, `"0.00"` when empty.
    pub fn total_price_display(&self) -> String {
        self.total_price().to_decimal_string()
    }

    /// Returns the total number of units across all lines (not the number
    /// of distinct products).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Returns the number of distinct product lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Looks up the line for a product id.
    pub fn get(&self, product_id: u64) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: u64, price_cents: i64, quantity: u32, max_quantity: u32) -> CartLineItem {
        CartLineItem::new(
            product_id,
            format!("Product {}", product_id),
            Money::from_cents(price_cents),
            format!("images/{}.png", product_id),
            quantity,
            max_quantity,
        )
    }

    /// Every line of every reachable cart stays inside its bounds.
    fn assert_invariants(cart: &Cart) {
        for line in cart.items() {
            assert!(line.quantity >= 1, "quantity below floor");
            assert!(line.quantity <= line.max_quantity, "quantity above ceiling");
        }
        let mut ids: Vec<u64> = cart.items().iter().map(|i| i.product_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.line_count(), "duplicate product id");
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();

        assert!(cart.add_item(item(1, 1000, 2, 5)));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_price_display(), "20.00");
        assert_invariants(&cart);
    }

    #[test]
    fn test_add_same_product_merges_quantities() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 2, 5));
        cart.add_item(item(1, 1000, 2, 5));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 4);
        assert_eq!(cart.total_price_display(), "40.00");
        assert_invariants(&cart);
    }

    #[test]
    fn test_merge_clamps_to_ceiling() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 4, 5));
        assert!(cart.add_item(item(1, 1000, 3, 5)));

        // 4 + 3 clamps to 5, not 7
        assert_eq!(cart.get(1).unwrap().quantity, 5);
        assert_eq!(cart.total_price_display(), "50.00");
        assert_invariants(&cart);
    }

    #[test]
    fn test_first_add_ceiling_is_authoritative() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 2, 3));
        // Stale catalog data claims the ceiling is 100. It is not.
        cart.add_item(item(1, 1000, 50, 100));

        let line = cart.get(1).unwrap();
        assert_eq!(line.max_quantity, 3);
        assert_eq!(line.quantity, 3);
        assert_invariants(&cart);
    }

    #[test]
    fn test_merge_ignores_incoming_price_and_title() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 1, 5));
        let mut repriced = item(1, 9999, 1, 5);
        repriced.title = "Renamed".to_string();
        cart.add_item(repriced);

        let line = cart.get(1).unwrap();
        assert_eq!(line.unit_price, Money::from_cents(1000));
        assert_eq!(line.title, "Product 1");
        assert_invariants(&cart);
    }

    #[test]
    fn test_merge_at_ceiling_is_no_op() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 5, 5));
        assert!(!cart.add_item(item(1, 1000, 2, 5)));
        assert_eq!(cart.get(1).unwrap().quantity, 5);
    }

    #[test]
    fn test_merge_zero_quantity_is_no_op() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 2, 5));
        assert!(!cart.add_item(item(1, 1000, 0, 5)));
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_price_display(), "20.00");
    }

    #[test]
    fn test_new_item_out_of_contract_input_is_normalized() {
        let mut cart = Cart::new();

        // Quantity 0 and quantity above ceiling both land inside bounds.
        cart.add_item(item(1, 1000, 0, 5));
        cart.add_item(item(2, 1000, 9, 5));
        // Ceiling below the floor is lifted to 1.
        cart.add_item(item(3, 1000, 1, 0));

        assert_eq!(cart.get(1).unwrap().quantity, 1);
        assert_eq!(cart.get(2).unwrap().quantity, 5);
        assert_eq!(cart.get(3).unwrap().max_quantity, 1);
        assert_invariants(&cart);
    }

    #[test]
    fn test_merge_saturates_on_huge_quantity() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 2, 5));
        cart.add_item(item(1, 1000, u32::MAX, 5));

        assert_eq!(cart.get(1).unwrap().quantity, 5);
        assert_invariants(&cart);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 2, 5));
        cart.add_item(item(2, 500, 3, 10));

        assert!(cart.remove_item(1));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 3);
        assert!(cart.get(1).is_none());

        // Removing again is a no-op, not an error
        assert!(!cart.remove_item(1));
        assert_invariants(&cart);
    }

    #[test]
    fn test_increase_item_stops_at_ceiling() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 1, 1));
        assert!(!cart.increase_item(1));
        assert_eq!(cart.get(1).unwrap().quantity, 1);

        cart.add_item(item(2, 1000, 1, 3));
        assert!(cart.increase_item(2));
        assert!(cart.increase_item(2));
        assert!(!cart.increase_item(2));
        assert_eq!(cart.get(2).unwrap().quantity, 3);
        assert_invariants(&cart);
    }

    #[test]
    fn test_decrease_item_stops_at_floor() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 1, 5));
        assert!(!cart.decrease_item(1));
        assert_eq!(cart.get(1).unwrap().quantity, 1);

        cart.add_item(item(2, 1000, 3, 5));
        assert!(cart.decrease_item(2));
        assert_eq!(cart.get(2).unwrap().quantity, 2);
        assert_invariants(&cart);
    }

    #[test]
    fn test_increase_decrease_unknown_id_is_no_op() {
        let mut cart = Cart::new();

        assert!(!cart.increase_item(404));
        assert!(!cart.decrease_item(404));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_over_multiple_lines() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1099, 2, 5)); // $21.98
        cart.add_item(item(2, 250, 3, 10)); // $7.50

        assert_eq!(cart.total_price(), Money::from_cents(2948));
        assert_eq!(cart.total_price_display(), "29.48");
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.total_price_display(), "0.00");
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();

        cart.add_item(item(1, 1000, 2, 5));
        cart.add_item(item(2, 500, 1, 5));

        assert!(cart.clear());
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price_display(), "0.00");

        // Clearing an empty cart changes nothing
        assert!(!cart.clear());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();

        cart.add_item(item(3, 100, 1, 5));
        cart.add_item(item(1, 100, 1, 5));
        cart.add_item(item(2, 100, 1, 5));
        cart.add_item(item(1, 100, 1, 5)); // merge must not reorder

        let ids: Vec<u64> = cart.items().iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
