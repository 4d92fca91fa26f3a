//! # Cart Store
//!
//! The owned, injectable session state object around the [`Cart`] aggregate.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operations                                 │
//! │                                                                         │
//! │  UI Action                Store Call              After Effect          │
//! │  ─────────                ──────────              ────────────          │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_item() ───────────► notify listeners     │
//! │                                                                         │
//! │  Tap "+" / "−" ─────────► increase/decrease ────► notify IF changed    │
//! │                                                                         │
//! │  Tap trash icon ────────► remove_item() ────────► notify IF changed    │
//! │                                                                         │
//! │  Checkout reads ────────► snapshot() ───────────► (read only)          │
//! │                                                                         │
//! │  Order confirmed ───────► reset_cart() ─────────► notify listeners     │
//! │                                                                         │
//! │  NOTE: listeners fire only after a mutation that actually changed       │
//! │        state. A "+" tap at the ceiling repaints nothing.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! One store per shopper session, created empty at session start and handed
//! to screens by the composition root. There is no module-level global; who
//! owns the store is explicit. The cart is cleared on reset, never torn
//! down mid-session.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use trolley_core::{validation, Cart, CartLineItem, Money, ValidationError};

/// Callback invoked with the cart after every effective mutation.
///
/// This is a notification mechanism for reactive UI, not a concurrency
/// mechanism; listeners run synchronously on the mutating call.
pub type CartListener = Box<dyn FnMut(&Cart) + Send>;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An immutable view of the cart taken for the read-then-submit checkout
/// sequence.
///
/// The snapshot decouples order construction from the live cart: whatever
/// the shopper taps after checkout started, the submitted order matches what
/// the flow read. Keeping that window free of interleaved mutations is the
/// calling flow's discipline, not something the store enforces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Line items at snapshot time, in display order.
    pub lines: Vec<CartLineItem>,

    /// Sum of `unit_price × quantity` over the lines.
    pub total_price: Money,

    /// Sum of quantities over the lines (units, not distinct products).
    pub unit_count: u64,
}

impl CartSnapshot {
    /// Checks if the snapshot has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The session cart store: the cart aggregate plus a listener registry.
pub struct CartStore {
    cart: Cart,
    listeners: Vec<(ListenerId, CartListener)>,
    next_listener_id: u64,
}

impl CartStore {
    /// Creates a store with an empty cart, as at session start.
    pub fn new() -> Self {
        CartStore {
            cart: Cart::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Read access to the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds a fully-formed line item sourced from the catalog at add time.
    ///
    /// ## Behavior
    /// - Malformed input (quantity 0, negative price, ceiling below 1) is
    ///   rejected here, before the aggregate runs
    /// - Well-formed input follows the merge-or-append rules of
    ///   [`Cart::add_item`]; the first add of a product freezes its ceiling
    ///
    /// Listeners are notified only if the cart changed (merging into a line
    /// already at its ceiling changes nothing).
    pub fn add_item(&mut self, item: CartLineItem) -> Result<(), ValidationError> {
        validation::validate_line_item(&item)?;

        debug!(
            product_id = item.product_id,
            quantity = item.quantity,
            max_quantity = item.max_quantity,
            "add_item"
        );

        if self.cart.add_item(item) {
            self.notify();
        }
        Ok(())
    }

    /// Removes the line for a product id; unknown ids are a no-op.
    pub fn remove_item(&mut self, product_id: u64) {
        debug!(product_id, "remove_item");

        if self.cart.remove_item(product_id) {
            self.notify();
        }
    }

    /// Increments a line's quantity by 1, stopping silently at its ceiling.
    pub fn increase_item(&mut self, product_id: u64) {
        debug!(product_id, "increase_item");

        if self.cart.increase_item(product_id) {
            self.notify();
        }
    }

    /// Decrements a line's quantity by 1, stopping silently at the floor
    /// of 1.
    pub fn decrease_item(&mut self, product_id: u64) {
        debug!(product_id, "decrease_item");

        if self.cart.decrease_item(product_id) {
            self.notify();
        }
    }

    /// Total price of the cart.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Total price rendered with two decimals, `"0.00"` when empty.
    pub fn total_price_display(&self) -> String {
        self.cart.total_price_display()
    }

    /// Total number of units in the cart.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Clears the cart back to its initial empty state.
    ///
    /// Called by the checkout flow after a confirmed order, or at sign-out.
    pub fn reset_cart(&mut self) {
        debug!("reset_cart");

        if self.cart.clear() {
            self.notify();
        }
    }

    /// Takes an immutable snapshot of lines and totals for checkout.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.cart.items().to_vec(),
            total_price: self.cart.total_price(),
            unit_count: self.cart.item_count(),
        }
    }

    /// Registers a listener invoked after every mutation that changed the
    /// cart. Returns an id for [`CartStore::unsubscribe`].
    pub fn subscribe(&mut self, listener: CartListener) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let initial_len = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != initial_len
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.cart);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Shared handle to a cart store.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<CartStore>>` because:
/// - `Arc`: lets the composition root hand the same store to every screen
/// - `Mutex`: one mutation at a time, even if UI glue hops threads
///
/// The intended deployment is one UI thread driving mutations; the lock is
/// the boundary guard, not a concurrency feature.
#[derive(Debug, Clone)]
pub struct SharedCartStore {
    store: Arc<Mutex<CartStore>>,
}

impl SharedCartStore {
    /// Creates a shared handle around a fresh empty store.
    pub fn new() -> Self {
        SharedCartStore {
            store: Arc::new(Mutex::new(CartStore::new())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = shared.with_store(|s| s.total_price_display());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let store = self.store.lock().expect("Cart store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// shared.with_store_mut(|s| s.increase_item(product_id));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut store = self.store.lock().expect("Cart store mutex poisoned");
        f(&mut store)
    }
}

impl Default for SharedCartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

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

    #[test]
    fn test_add_item_rejects_malformed_input() {
        let mut store = CartStore::new();

        assert!(store.add_item(item(1, 1000, 0, 5)).is_err());
        assert!(store.add_item(item(1, 1000, 1, 0)).is_err());
        assert!(store.add_item(item(1, -50, 1, 5)).is_err());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_listeners_fire_on_change() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);

        let mut store = CartStore::new();
        store.subscribe(Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        store.add_item(item(1, 1000, 2, 5)).unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        store.increase_item(1);
        assert_eq!(counter.load(Ordering::SeqCst), 2);

        store.remove_item(1);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_listeners_skip_no_op_mutations() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);

        let mut store = CartStore::new();
        store.add_item(item(1, 1000, 1, 1)).unwrap();

        store.subscribe(Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        store.increase_item(1); // at ceiling
        store.decrease_item(1); // at floor
        store.remove_item(404); // unknown id
        store.add_item(item(1, 1000, 1, 1)).unwrap(); // merge at ceiling

        assert_eq!(counter.load(Ordering::SeqCst), 0);

        // Resetting an empty-after-remove cart also stays quiet
        store.remove_item(1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        store.reset_cart();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_sees_current_cart() {
        let observed = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&observed);

        let mut store = CartStore::new();
        store.subscribe(Box::new(move |cart| {
            *sink.lock().unwrap() = cart.total_price_display();
        }));

        store.add_item(item(1, 1000, 2, 5)).unwrap();
        assert_eq!(&*observed.lock().unwrap(), "20.00");

        store.increase_item(1);
        assert_eq!(&*observed.lock().unwrap(), "30.00");
    }

    #[test]
    fn test_unsubscribe() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);

        let mut store = CartStore::new();
        let id = store.subscribe(Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));

        store.add_item(item(1, 1000, 1, 5)).unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_snapshot_is_decoupled_from_live_cart() {
        let mut store = CartStore::new();
        store.add_item(item(1, 1000, 2, 5)).unwrap();

        let snapshot = store.snapshot();
        store.increase_item(1);

        assert_eq!(snapshot.unit_count, 2);
        assert_eq!(snapshot.total_price, Money::from_cents(2000));
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_shared_store_handle() {
        let shared = SharedCartStore::new();
        let clone = shared.clone();

        clone.with_store_mut(|s| s.add_item(item(1, 1000, 2, 5)).unwrap());

        let total = shared.with_store(|s| s.total_price_display());
        assert_eq!(total, "20.00");
    }

    #[test]
    fn test_reset_cart() {
        let mut store = CartStore::new();
        store.add_item(item(1, 1000, 2, 5)).unwrap();
        store.add_item(item(2, 500, 1, 5)).unwrap();

        store.reset_cart();

        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total_price_display(), "0.00");
    }
}
