use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::Address;
use crate::mapping_framework::Destination;
use crate::order_item_projection::OrderItemSummary;

// DTOs for Order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: i32,
    pub buyer_email: String,
    pub created_at: DateTime<Utc>,
    pub ship_to_address: Option<Address>,
    /// Short name of the delivery method.
    pub delivery_method: String,
    pub order_items: Vec<OrderItemSummary>,
    pub subtotal: Decimal,
    pub shipping_price: Decimal,
    pub total: Decimal,
    pub invoice: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<OrderSummary>>,
}

impl Destination for OrderSummary {
    const MEMBERS: &'static [&'static str] = &[
        "id",
        "buyer_email",
        "created_at",
        "ship_to_address",
        "delivery_method",
        "order_items",
        "subtotal",
        "shipping_price",
        "total",
        "invoice",
        "status",
        "parent",
    ];
}
