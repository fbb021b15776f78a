use rust_decimal::Decimal;
use serde::Serialize;

use crate::mapping_framework::Destination;

// DTOs for OrderItem
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemSummary {
    pub product_id: i32,
    pub price: Decimal,
    pub product_name: String,
    pub image_url: String,
    pub quantity: i32,
}

impl Destination for OrderItemSummary {
    const MEMBERS: &'static [&'static str] = &["product_id", "price", "product_name", "image_url", "quantity"];
}
