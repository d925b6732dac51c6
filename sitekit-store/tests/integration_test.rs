use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use sitekit_cart::{Cart, CartLineItem, PricingEngine, TemplateRef};
use sitekit_catalog::TemplateCatalog;
use sitekit_core::KeyValueStore;
use sitekit_offer::{Discount, Offer, OfferRepository};
use sitekit_order::pipeline::{self, AdminListQuery};
use sitekit_order::{
    Booking, BookingRepository, Order, OrderItem, OrderRepository, OrderStatus, PaymentInfo,
    StatusFilter,
};
use sitekit_shared::Customer;
use sitekit_store::{
    Config, KvBookingRepository, KvOfferRepository, KvOrderRepository, MemoryStore,
};

#[tokio::test]
async fn test_key_value_round_trip() {
    let store = MemoryStore::new();

    store.set("sitekit:misc:1", json!({"a": 1})).await.unwrap();
    store.set("sitekit:misc:2", json!({"a": 2})).await.unwrap();
    store.set("other:misc:3", json!({"a": 3})).await.unwrap();

    let fetched = store.get("sitekit:misc:1").await.unwrap();
    assert_eq!(fetched, Some(json!({"a": 1})));

    // Prefix listing only sees its own namespace.
    let listed = store.list("sitekit:misc:").await.unwrap();
    assert_eq!(listed.len(), 2);

    // Last write wins.
    store.set("sitekit:misc:1", json!({"a": 9})).await.unwrap();
    assert_eq!(store.get("sitekit:misc:1").await.unwrap(), Some(json!({"a": 9})));

    assert!(store.remove("sitekit:misc:1").await.unwrap());
    assert!(!store.remove("sitekit:misc:1").await.unwrap());
    assert_eq!(store.get("sitekit:misc:1").await.unwrap(), None);
}

#[tokio::test]
async fn test_offer_repository_filters_inactive() {
    let store = Arc::new(MemoryStore::new());
    let repo = KvOfferRepository::new(store, "sitekit");

    let active = Offer::new("WELCOME10", Discount::Percentage(10.0), None);
    let mut retired = Offer::new("OLD50", Discount::Percentage(50.0), None);
    retired.deactivate();

    repo.save_offer(&active).await.unwrap();
    repo.save_offer(&retired).await.unwrap();

    let listed = repo.list_active_offers().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].code, "WELCOME10");

    // The inactive record still exists and can be fetched directly.
    let fetched = repo.get_offer(retired.id).await.unwrap().unwrap();
    assert!(!fetched.is_active);

    assert!(repo.remove_offer(retired.id).await.unwrap());
    assert_eq!(repo.get_offer(retired.id).await.unwrap().map(|o| o.id), None);
}

#[tokio::test]
async fn test_order_status_update_round_trip() {
    let store = Arc::new(MemoryStore::new());
    let repo = KvOrderRepository::new(store, "sitekit");

    let order = Order::place(
        Customer::new("Jane Cooper", "jane@example.com"),
        vec![OrderItem::new("Blog Classic", None, 3999)],
        PaymentInfo {
            method: "upi".to_string(),
            total: 4719,
        },
    );
    repo.save_order(&order).await.unwrap();

    // Admin flow: load, transition, save.
    let mut loaded = repo.get_order(order.id).await.unwrap().unwrap();
    loaded.update_status(OrderStatus::Confirmed).unwrap();
    repo.save_order(&loaded).await.unwrap();

    let reloaded = repo.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(reloaded.status, OrderStatus::Confirmed);

    assert!(repo.remove_order(order.id).await.unwrap());
    assert!(repo.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_checkout_to_admin_dashboard_flow() {
    let config = Config::load().unwrap();
    let store = Arc::new(MemoryStore::new());
    let offers = KvOfferRepository::new(store.clone(), config.storage.namespace.clone());
    let orders = KvOrderRepository::new(store.clone(), config.storage.namespace.clone());

    // Admin publishes an offer from the free-form discount string.
    let offer = Offer::from_discount_string("LAUNCH10", "10% OFF", None).unwrap();
    offers.save_offer(&offer).await.unwrap();

    // Customer customizes a template into the cart and redeems the code.
    let catalog = TemplateCatalog::with_defaults();
    let template = catalog.list_by_category("e-commerce")[0];

    let mut cart = Cart::new();
    cart.add_item(
        CartLineItem::new(
            TemplateRef::from(template),
            10000,
            HashMap::from([("pages".to_string(), "12".to_string())]),
        )
        .unwrap(),
    );

    let active = offers.list_active_offers().await.unwrap();
    cart.apply_code("launch10", &active).unwrap();

    let engine = PricingEngine::new(config.pricing.to_pricing_config());
    let totals = cart.totals(&engine);
    assert_eq!(totals.subtotal, 10000);
    assert_eq!(totals.discount_amount, 1000);
    assert_eq!(totals.tax_amount, 1620);
    assert_eq!(totals.total, 9620);

    // Checkout completion records the order.
    let items = cart
        .items
        .iter()
        .map(|line| {
            OrderItem::new(
                line.template.name.clone(),
                line.template.description.clone(),
                line.price,
            )
        })
        .collect();
    let order = Order::place(
        Customer::new("Jane Cooper", "jane@example.com"),
        items,
        PaymentInfo {
            method: "card".to_string(),
            total: totals.total,
        },
    );
    orders.save_order(&order).await.unwrap();
    cart.clear();

    // The admin dashboard finds it through the list pipeline.
    let all_orders = orders.list_orders().await.unwrap();
    let view = pipeline::apply(
        &all_orders,
        &AdminListQuery {
            search: "jane".to_string(),
            status: StatusFilter::from_value("pending"),
            ..AdminListQuery::default()
        },
    );

    assert_eq!(view.len(), 1);
    assert_eq!(view[0].payment.total, 9620);
}

#[tokio::test]
async fn test_booking_repository_round_trip() {
    let store = Arc::new(MemoryStore::new());
    let repo = KvBookingRepository::new(store, "sitekit");

    let booking = Booking::new(
        "Ray Fields",
        "ray@example.com",
        "Law firm site",
        "Corporate build",
        40000,
        None,
    );
    repo.save_booking(&booking).await.unwrap();

    let listed = repo.list_bookings().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].project_name, "Law firm site");

    assert!(repo.remove_booking(booking.id).await.unwrap());
    assert!(repo.list_bookings().await.unwrap().is_empty());
}
