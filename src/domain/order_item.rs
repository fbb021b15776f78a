use rust_decimal::Decimal;

/// Snapshot of a product taken when the order was placed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductItemOrdered {
    pub product_item_id: i32,
    pub product_name: String,
    pub image_url: String,
}

impl ProductItemOrdered {
    pub fn new(product_item_id: i32, product_name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            product_item_id,
            product_name: product_name.into(),
            image_url: image_url.into(),
        }
    }
}

/// A line of an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub price: Decimal,
    pub quantity: i32,
    pub item_ordered: Option<ProductItemOrdered>,
}

impl OrderItem {
    pub fn new(item_ordered: ProductItemOrdered, price: Decimal, quantity: i32) -> Self {
        Self {
            id: 0,
            price,
            quantity,
            item_ordered: Some(item_ordered),
        }
    }
}
