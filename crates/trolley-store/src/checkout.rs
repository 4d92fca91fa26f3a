//! # Checkout Flow
//!
//! The read-then-submit sequence that turns a cart into an order request,
//! and the only code authorized to reset the cart.
//!
//! ## Checkout Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  "Checkout" tapped                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.snapshot() ───► empty? ──► VALIDATION_FAILED, cart untouched     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderRequest { slug, lines, totalCents }                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderService::submit ──► Err ──► error to UI, cart untouched           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderConfirmation (Pending)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.reset_cart() ──► listeners repaint an empty cart                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retry and partial-failure policy belong to the order backend and the UI;
//! this flow's only promise is that the cart resets exactly when the backend
//! confirmed the order, and never otherwise. The no-mutations-between-read-
//! and-submit guarantee is discipline required of the caller driving this
//! flow, not something the store enforces.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::store::{CartSnapshot, CartStore};

/// One product/quantity pair of an order, as the order backend expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: u64,
    pub quantity: u32,
}

/// The order request sent to the remote order service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Client-generated order slug, unique without backend coordination.
    pub slug: String,

    /// Product/quantity pairs from the cart snapshot, in display order.
    pub lines: Vec<OrderLine>,

    /// Order total in cents, computed from the same snapshot.
    pub total_cents: i64,
}

impl OrderRequest {
    /// Builds a request from a cart snapshot with a fresh slug.
    pub fn from_snapshot(snapshot: &CartSnapshot) -> Self {
        OrderRequest {
            slug: generate_order_slug(),
            lines: snapshot
                .lines
                .iter()
                .map(|line| OrderLine {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
            total_cents: snapshot.total_price.cents(),
        }
    }
}

/// Remote order status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

/// Confirmation returned by the order backend on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Backend-assigned order id.
    pub order_id: u64,

    /// Echo of the request slug, the key order screens navigate by.
    pub slug: String,

    /// Initial status; a fresh order starts `Pending`.
    pub status: OrderStatus,
}

/// The remote order submission service.
///
/// Implemented outside this crate against the real backend. Retries and
/// failure taxonomy (`REMOTE_UNAVAILABLE`, `UNAUTHORIZED`, ...) are its
/// responsibility; the checkout flow only reacts to the outcome.
pub trait OrderService {
    fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, ServiceError>;
}

/// Generates a client-side order slug.
///
/// UUID-derived so two devices can create orders offline-safe without
/// colliding; shortened because the slug ends up in URLs and receipts.
pub fn generate_order_slug() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("order-{}", &id[..12])
}

/// Drives a cart through order submission.
pub struct CheckoutFlow<S: OrderService> {
    service: S,
}

impl<S: OrderService> CheckoutFlow<S> {
    /// Creates a flow around an order service.
    pub fn new(service: S) -> Self {
        CheckoutFlow { service }
    }

    /// Submits the current cart as an order.
    ///
    /// ## Behavior
    /// - Empty cart: `VALIDATION_FAILED`, nothing submitted
    /// - Submission failure: the error is surfaced and the cart is left
    ///   exactly as it was, so the shopper can retry
    /// - Confirmed success: the cart is reset; this is the reset_cart
    ///   call site for the whole application
    pub fn place_order(&self, store: &mut CartStore) -> Result<OrderConfirmation, ServiceError> {
        let snapshot = store.snapshot();
        if snapshot.is_empty() {
            return Err(ServiceError::validation("cart is empty"));
        }

        let request = OrderRequest::from_snapshot(&snapshot);
        debug!(
            slug = %request.slug,
            lines = request.lines.len(),
            total_cents = request.total_cents,
            "submitting order"
        );

        let confirmation = self.service.submit(&request).map_err(|err| {
            warn!(slug = %request.slug, error = %err, "order submission failed, cart kept");
            err
        })?;

        info!(
            order_id = confirmation.order_id,
            slug = %confirmation.slug,
            "order confirmed, resetting cart"
        );
        store.reset_cart();

        Ok(confirmation)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
