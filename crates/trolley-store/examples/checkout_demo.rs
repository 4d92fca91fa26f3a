//! Runs a complete shopper session against the in-memory catalog and a fake
//! order backend, with tracing wired up so every store mutation is visible.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p trolley-store --example checkout_demo
//! ```

use trolley_core::Money;
use trolley_store::{
    CartStore, CatalogProduct, CheckoutFlow, InMemoryCatalog, OrderConfirmation, OrderRequest,
    OrderService, OrderStatus, ProductCatalog, ServiceError,
};

/// Order backend stand-in: confirms everything it is given.
struct FakeOrderService;

impl OrderService for FakeOrderService {
    fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, ServiceError> {
        println!(
            "backend: accepted {} ({} lines, total {} cents)",
            request.slug,
            request.lines.len(),
            request.total_cents
        );
        Ok(OrderConfirmation {
            order_id: 1001,
            slug: request.slug.clone(),
            status: OrderStatus::Pending,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalog = InMemoryCatalog::with_products([
        CatalogProduct {
            id: 1,
            slug: "wireless-headphones".to_string(),
            title: "Wireless Headphones".to_string(),
            unit_price: Money::from_cents(7999),
            image_ref: "images/wireless-headphones.png".to_string(),
            max_quantity: 4,
        },
        CatalogProduct {
            id: 2,
            slug: "smart-watch".to_string(),
            title: "Smart Watch".to_string(),
            unit_price: Money::from_cents(14999),
            image_ref: "images/smart-watch.png".to_string(),
            max_quantity: 2,
        },
    ]);

    let mut store = CartStore::new();

    // The cart screen repaints whenever the store reports a change.
    store.subscribe(Box::new(|cart| {
        println!(
            "cart screen: {} units, total {}",
            cart.item_count(),
            cart.total_price_display()
        );
    }));

    // Shopper browses and taps around.
    let headphones = catalog.product_by_slug("wireless-headphones")?;
    store.add_item(headphones.to_line_item(1))?;
    store.add_item(headphones.to_line_item(1))?; // merges into one line

    let watch = catalog.product_by_slug("smart-watch")?;
    store.add_item(watch.to_line_item(1))?;
    store.increase_item(watch.id);
    store.increase_item(watch.id); // at ceiling of 2: silently ignored

    // Checkout.
    let flow = CheckoutFlow::new(FakeOrderService);
    let confirmation = flow.place_order(&mut store)?;
    println!(
        "order {} placed as {} ({:?})",
        confirmation.order_id, confirmation.slug, confirmation.status
    );

    Ok(())
}
