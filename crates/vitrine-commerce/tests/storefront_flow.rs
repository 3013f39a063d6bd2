//! End-to-end storefront flow: browse the catalog, fill the cart, walk
//! the checkout, and rehydrate across restarts.

use std::sync::Arc;

use vitrine_commerce::cart::LEDGER_KEY;
use vitrine_commerce::prelude::*;
use vitrine_kv::{BlobStore, MemoryStore};

fn open_cart(store: &Arc<MemoryStore>) -> Ledger<Arc<MemoryStore>> {
    Ledger::open(Arc::clone(store), PricingConfig::default())
}

#[test]
fn browse_checkout_and_place_order() {
    let catalog = Catalog::demo();
    let store = Arc::new(MemoryStore::new());
    let mut cart = open_cart(&store);

    // Browse: search, then pick a product off the results.
    let headphones = catalog.search("headphones")[0].clone();
    let watch = catalog.list_by_category("Electronics")
        .into_iter()
        .find(|p| p.name.contains("Watch"))
        .unwrap()
        .clone();

    cart.add(&headphones, 1);
    cart.add(&watch, 2);

    // Discounted prices drive the subtotal: 249.99 + 2 * 179.99.
    let totals = cart.totals();
    assert_eq!(totals.subtotal, Money::new(60997));
    assert_eq!(totals.shipping, Money::zero());
    assert_eq!(totals.tax, Money::new(4270));
    assert_eq!(totals.total, Money::new(65267));

    // Walk the checkout with next-day delivery.
    let mut checkout = Checkout::begin(&cart).unwrap();
    checkout.set_contact(ContactDetails {
        email: "dana@example.com".to_string(),
        first_name: "Dana".to_string(),
        last_name: "Reyes".to_string(),
        address: "100 Market St".to_string(),
        city: "Springfield".to_string(),
        province: "IL".to_string(),
        postal_code: "62701".to_string(),
        country: "United States".to_string(),
        phone: "555-0100".to_string(),
    });
    checkout.set_shipping_method(ShippingMethod::NextDay);

    assert_eq!(checkout.advance(&mut cart), CheckoutStep::Shipping);
    assert_eq!(checkout.advance(&mut cart), CheckoutStep::Payment);
    assert_eq!(checkout.advance(&mut cart), CheckoutStep::Review);
    assert_eq!(checkout.advance(&mut cart), CheckoutStep::Completed);

    let confirmation = checkout.confirmation().unwrap();
    assert!(confirmation.order_number.starts_with("ORD-"));
    assert_eq!(confirmation.item_count, 3);
    assert_eq!(confirmation.shipping, Money::new(2499));
    assert_eq!(confirmation.total, Money::new(60997 + 2499 + 4270));

    // Placement cleared the cart, in memory and in the store.
    assert!(cart.is_empty());
    assert!(!checkout.blocked_on_empty_cart(&cart));
    let reopened = open_cart(&store);
    assert!(reopened.is_empty());
}

#[test]
fn cart_survives_a_restart() {
    let catalog = Catalog::demo();
    let store = Arc::new(MemoryStore::new());

    {
        let mut cart = open_cart(&store);
        let tee = catalog.get_by_id(&ProductId::new("4")).unwrap();
        cart.add(tee, 2);
    }

    let mut cart = open_cart(&store);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.totals().subtotal, Money::new(6998));

    // Rehydrated state keeps behaving like a live cart.
    cart.set_quantity(&ProductId::new("4"), 1);
    assert_eq!(cart.totals().subtotal, Money::new(3499));
}

#[test]
fn corrupt_persisted_cart_starts_empty() {
    let store = Arc::new(MemoryStore::new());
    store.save(LEDGER_KEY, b"\x00\x01 definitely not json").unwrap();

    let cart = open_cart(&store);
    assert!(cart.is_empty());
    assert!(Checkout::begin(&cart).is_err());
}

#[test]
fn abandoning_checkout_keeps_the_cart() {
    let catalog = Catalog::demo();
    let store = Arc::new(MemoryStore::new());
    let mut cart = open_cart(&store);
    cart.add(&catalog.products()[0], 1);

    {
        let mut checkout = Checkout::begin(&cart).unwrap();
        checkout.advance(&mut cart);
        checkout.advance(&mut cart);
        // Session dropped before review: abandonment.
    }

    assert!(!cart.is_empty());
    let resumed = Checkout::begin(&cart).unwrap();
    assert_eq!(resumed.step(), CheckoutStep::Information);
    assert_eq!(resumed.shipping_method(), ShippingMethod::Standard);
}
