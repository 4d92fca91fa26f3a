//! # Product Catalog Seam
//!
//! The read-only collaborator that supplies everything needed to build a
//! cart line item at the moment a product is presented for adding.
//!
//! The store never queries the catalog itself. The flow is always:
//!
//! ```text
//! product screen ──► ProductCatalog::product_by_slug ──► CatalogProduct
//!                                                             │
//!                                            to_line_item(quantity)
//!                                                             │
//!                                                             ▼
//!                                                  CartStore::add_item
//! ```
//!
//! Whatever `max_quantity` the catalog reports here is frozen onto the line
//! item; the cart does not re-fetch it for the rest of the session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use trolley_core::{CartLineItem, Money};

use crate::error::ServiceError;

/// A product as the catalog presents it for adding to the cart.
///
/// This is the add-time snapshot contract of the remote catalog: price and
/// purchase ceiling are whatever the backend said when the shopper looked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    /// Stable product identifier.
    pub id: u64,

    /// URL-friendly business identifier, the key product screens navigate by.
    pub slug: String,

    /// Display name.
    pub title: String,

    /// Current price per unit.
    pub unit_price: Money,

    /// Opaque reference to the hero image.
    pub image_ref: String,

    /// Purchase limit for this product (inventory or policy).
    pub max_quantity: u32,
}

impl CatalogProduct {
    /// Builds a cart line item for the requested quantity.
    ///
    /// The line carries this product's current price and ceiling; if the
    /// product is already in the cart, the cart's own frozen values win on
    /// merge.
    pub fn to_line_item(&self, quantity: u32) -> CartLineItem {
        CartLineItem::new(
            self.id,
            self.title.clone(),
            self.unit_price,
            self.image_ref.clone(),
            quantity,
            self.max_quantity,
        )
    }
}

/// Read-only access to the product catalog.
///
/// Implemented outside this crate against the real backend; the bundled
/// [`InMemoryCatalog`] serves demos and tests.
pub trait ProductCatalog {
    /// Looks up a product by its slug.
    ///
    /// ## Errors
    /// - `NOT_FOUND` when no product has the slug
    /// - `REMOTE_UNAVAILABLE` when the backend cannot be reached
    fn product_by_slug(&self, slug: &str) -> Result<CatalogProduct, ServiceError>;
}

/// A catalog backed by a fixed set of products.
///
/// Mirrors the bundled product list a shop ships for offline screens; also
/// the test double of choice for the checkout flow.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, CatalogProduct>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from a product list, keyed by slug.
    pub fn with_products(products: impl IntoIterator<Item = CatalogProduct>) -> Self {
        InMemoryCatalog {
            products: products
                .into_iter()
                .map(|p| (p.slug.clone(), p))
                .collect(),
        }
    }

    /// Adds or replaces a product.
    pub fn insert(&mut self, product: CatalogProduct) {
        self.products.insert(product.slug.clone(), product);
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn product_by_slug(&self, slug: &str) -> Result<CatalogProduct, ServiceError> {
        self.products
            .get(slug)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Product", slug))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
