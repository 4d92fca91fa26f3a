//! # trolley-store: Session State Layer for Trolley
//!
//! Owns the live cart for a shopper session and the seams to everything
//! outside it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Mobile Frontend (TypeScript)                            │
//! │     renders cart, taps add / + / − / remove / checkout                  │
//! └───────────────────────────────┬─────────────────────────────────────────┘
//!                                 │
//! ┌───────────────────────────────▼─────────────────────────────────────────┐
//! │                   ★ trolley-store (THIS CRATE) ★                        │
//! │                                                                         │
//! │   ┌───────────┐   ┌───────────┐   ┌───────────┐   ┌───────────┐        │
//! │   │   store   │   │  catalog  │   │ checkout  │   │   error   │        │
//! │   │ CartStore │   │   trait   │   │   flow    │   │  taxonomy │        │
//! │   │ listeners │   │  + demo   │   │ + slugs   │   │           │        │
//! │   └─────┬─────┘   └───────────┘   └───────────┘   └───────────┘        │
//! └─────────┼───────────────────────────────────────────────────────────────┘
//!           │
//! ┌─────────▼─────────┐       remote collaborators (not in this repo)
//! │   trolley-core    │       ┌─────────────────┐   ┌─────────────────┐
//! │   Cart aggregate  │       │ product catalog │   │  order service  │
//! └───────────────────┘       └─────────────────┘   └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - [`CartStore`], change listeners, snapshots, shared handle
//! - [`catalog`] - the read-only product catalog seam
//! - [`checkout`] - order submission flow, the sole caller of reset
//! - [`error`] - the `NOT_FOUND` / `VALIDATION_FAILED` / `REMOTE_UNAVAILABLE`
//!   / `UNAUTHORIZED` taxonomy the UI switches on

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod store;

pub use catalog::{CatalogProduct, InMemoryCatalog, ProductCatalog};
pub use checkout::{
    CheckoutFlow, OrderConfirmation, OrderLine, OrderRequest, OrderService, OrderStatus,
};
pub use error::{ErrorCode, ServiceError};
pub use store::{CartListener, CartSnapshot, CartStore, ListenerId, SharedCartStore};
