use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{Address, OrderItem};

/// Lifecycle state of an order. Values start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum OrderState {
    #[default]
    Pending = 1,
    PaymentReceived,
    PaymentFailed,
    Shipped,
    Completed,
    Cancelled,
    Expired,
}

impl OrderState {
    pub const ALL: [OrderState; 7] = [
        OrderState::Pending,
        OrderState::PaymentReceived,
        OrderState::PaymentFailed,
        OrderState::Shipped,
        OrderState::Completed,
        OrderState::Cancelled,
        OrderState::Expired,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// How an order gets to the buyer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryMethod {
    pub id: i32,
    pub short_name: String,
    pub delivery_time: String,
    pub description: String,
    pub price: Decimal,
}

/// Represents a customer order.
///
/// `parent` points at another order (or at this one). The link is weak, so the
/// parent must be owned elsewhere; see [`Order::into_self_parented`] for the
/// self-referencing case.
#[derive(Debug, Clone, Default)]
pub struct Order {
    pub id: i32,
    pub buyer_email: String,
    pub created_at: DateTime<Utc>,
    pub ship_to_address: Option<Address>,
    pub delivery_method: Option<DeliveryMethod>,
    pub subtotal: Decimal,
    pub order_state: OrderState,
    pub invoice: String,
    pub payment_intent_id: String,
    pub order_items: Vec<OrderItem>,
    pub parent: Option<Weak<Order>>,
}

impl Order {
    /// Creates a pending order stamped with the current time.
    ///
    /// # Notes
    /// The `id` is left at 0 and `payment_intent_id` empty; both are assigned later.
    pub fn new(
        order_items: Vec<OrderItem>,
        buyer_email: impl Into<String>,
        ship_to_address: Address,
        delivery_method: DeliveryMethod,
        subtotal: Decimal,
        invoice: impl Into<String>,
    ) -> Self {
        Self {
            buyer_email: buyer_email.into(),
            created_at: Utc::now(),
            ship_to_address: Some(ship_to_address),
            delivery_method: Some(delivery_method),
            subtotal,
            invoice: invoice.into(),
            order_items,
            ..Self::default()
        }
    }

    /// Subtotal plus the delivery price. `None` without a delivery method.
    pub fn total(&self) -> Option<Decimal> {
        self.delivery_method
            .as_ref()
            .map(|delivery| self.subtotal + delivery.price)
    }

    pub fn parent(&self) -> Option<Arc<Order>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn with_parent(mut self, parent: &Arc<Order>) -> Self {
        self.parent = Some(Arc::downgrade(parent));
        self
    }

    /// Wraps the order in an `Arc` whose parent link points back at itself.
    pub fn into_self_parented(self) -> Arc<Order> {
        Arc::new_cyclic(|me| Order {
            parent: Some(me.clone()),
            ..self
        })
    }
}
