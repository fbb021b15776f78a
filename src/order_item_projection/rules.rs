use crate::domain::OrderItem;
use crate::error::MappingError;
use crate::mapping_framework::{MappingContext, MemberRule, Projection};

use super::OrderItemSummary;

/// `OrderItem -> OrderItemSummary`.
///
/// Product fields come from the `item_ordered` snapshot, which must be present.
pub struct OrderItemSummaryRule;

impl Projection for OrderItemSummaryRule {
    type Source = OrderItem;
    type Destination = OrderItemSummary;

    fn members(&self) -> Vec<MemberRule> {
        vec![
            MemberRule::map_from("price", "price"),
            MemberRule::map_from("quantity", "quantity"),
            MemberRule::map_from("product_id", "item_ordered.product_item_id"),
            MemberRule::map_from("product_name", "item_ordered.product_name"),
            MemberRule::map_from("image_url", "item_ordered.image_url"),
        ]
    }

    fn project(&self, item: &OrderItem, _ctx: &mut MappingContext<'_>) -> Result<OrderItemSummary, MappingError> {
        let ordered = item
            .item_ordered
            .as_ref()
            .ok_or_else(|| MappingError::null_reference("item_ordered.product_item_id"))?;

        Ok(OrderItemSummary {
            product_id: ordered.product_item_id,
            price: item.price,
            product_name: ordered.product_name.clone(),
            image_url: ordered.image_url.clone(),
            quantity: item.quantity,
        })
    }
}
