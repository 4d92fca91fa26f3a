//! # trolley-core: Pure Cart Logic for Trolley
//!
//! This crate is the **heart** of Trolley, a client-side shopping-cart state
//! engine for a retail mobile app. It contains the cart aggregate and its
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trolley Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile Frontend (TypeScript)                    │   │
//! │  │    Product Screen ──► Cart Screen ──► Checkout ──► Orders       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              trolley-store (session state layer)                │   │
//! │  │    CartStore, change listeners, catalog/order collaborators     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ trolley-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   item    │  │   cart    │  │ validation│  │   │
//! │  │   │   Money   │  │ LineItem  │  │   Cart    │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO UI • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`item`] - The cart line item and its frozen-at-add fields
//! - [`cart`] - The cart aggregate: merge, clamp, aggregate
//! - [`error`] - Validation error types
//! - [`validation`] - Malformed-input checks for the store facade
//!
//! ## Design Principles
//!
//! 1. **Total operations**: every cart mutation is a total function; bad
//!    taps become no-ops, never panics or errors
//! 2. **No I/O**: the catalog and order backends are someone else's problem
//! 3. **Integer money**: all monetary values are cents (i64)
//! 4. **Frozen bounds**: a line's `max_quantity` is fixed at first add
//!
//! ## Example Usage
//!
//! ```rust
//! use trolley_core::{Cart, CartLineItem, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_item(CartLineItem::new(
//!     1,
//!     "Headphones",
//!     Money::from_cents(1000),
//!     "images/headphones.png",
//!     2,
//!     5,
//! ));
//! cart.add_item(CartLineItem::new(
//!     1,
//!     "Headphones",
//!     Money::from_cents(1000),
//!     "images/headphones.png",
//!     2,
//!     5,
//! ));
//!
//! // Same product merged into one line, quantity summed
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.item_count(), 4);
//! assert_eq!(cart.total_price_display(), "40.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod item;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trolley_core::Cart` instead of
// `use trolley_core::cart::Cart`

pub use cart::Cart;
pub use error::ValidationError;
pub use item::CartLineItem;
pub use money::Money;
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The quantity floor on every cart line.
///
/// ## Business Reason
/// A line at quantity 0 is not "a line you are buying zero of", it simply
/// does not belong in the cart. Decrease stops here; removal is an explicit
/// separate action.
pub const QUANTITY_FLOOR: u32 = 1;
