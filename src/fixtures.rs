//! # Test Fixtures
//!
//! Builders for source graphs used across the unit and integration tests.
//!
//! Use [`order_with_items`] for an order that maps cleanly, then override the
//! fields a test cares about with struct update syntax.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::app_system::order_rule_set;
use crate::config::MapperConfig;
use crate::domain::{Address, DeliveryMethod, Order, OrderItem, ProductItemOrdered};
use crate::mapping_framework::Mapper;

/// A mapper over the full order rule set.
pub fn order_mapper(config: MapperConfig) -> Mapper {
    Mapper::new(order_rule_set().expect("order rules configure"), config).expect("order rules validate")
}

pub fn delivery(short_name: &str, price: Decimal) -> DeliveryMethod {
    DeliveryMethod {
        id: 1,
        short_name: short_name.to_string(),
        delivery_time: "1-2 Days".to_string(),
        description: "Fastest delivery time".to_string(),
        price,
    }
}

/// An item for product `product_id` with a whole-unit price.
pub fn item(product_id: i32, price: i64, quantity: i32) -> OrderItem {
    OrderItem {
        id: product_id,
        ..OrderItem::new(
            ProductItemOrdered::new(product_id, format!("Product {product_id}"), format!("images/{product_id}.png")),
            Decimal::new(price, 0),
            quantity,
        )
    }
}

/// An order shipped with "UPS1" at 10, whose subtotal is the sum of its lines.
pub fn order_with_items(order_items: Vec<OrderItem>) -> Order {
    let subtotal: Decimal = order_items
        .iter()
        .map(|line| line.price * Decimal::from(line.quantity))
        .sum();

    Order {
        id: 1,
        buyer_email: "alice@example.com".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        ship_to_address: Some(Address::new("Alice", "Smith", "Main Street 1", "10001", "New York")),
        delivery_method: Some(delivery("UPS1", Decimal::new(10, 0))),
        subtotal,
        invoice: "Invoice nr 7".to_string(),
        payment_intent_id: "pi_123".to_string(),
        order_items,
        ..Order::default()
    }
}
