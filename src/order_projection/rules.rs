use crate::domain::{Order, OrderItem};
use crate::error::MappingError;
use crate::mapping_framework::{MappingContext, MemberRule, Projection};
use crate::order_item_projection::OrderItemSummary;

use super::{status_label, OrderSummary};

/// `Order -> OrderSummary`.
///
/// The delivery method is required: its short name, its price and the order
/// total all read through it. `parent` is resolved by name against this same
/// type map and follows the engine's cycle policy.
pub struct OrderSummaryRule;

impl Projection for OrderSummaryRule {
    type Source = Order;
    type Destination = OrderSummary;

    fn members(&self) -> Vec<MemberRule> {
        vec![
            MemberRule::map_from("id", "id"),
            MemberRule::map_from("buyer_email", "buyer_email"),
            MemberRule::map_from("created_at", "created_at"),
            MemberRule::map_from("ship_to_address", "ship_to_address"),
            MemberRule::map_from("delivery_method", "delivery_method.short_name"),
            MemberRule::each::<OrderItem, OrderItemSummary>("order_items", "order_items"),
            MemberRule::map_from("subtotal", "subtotal"),
            MemberRule::map_from("shipping_price", "delivery_method.price"),
            MemberRule::computed("total", "total()"),
            MemberRule::map_from("invoice", "invoice"),
            MemberRule::computed("status", "status_label(order_state)"),
            MemberRule::nested::<Order, OrderSummary>("parent", "parent"),
        ]
    }

    fn project(&self, order: &Order, ctx: &mut MappingContext<'_>) -> Result<OrderSummary, MappingError> {
        let delivery = order
            .delivery_method
            .as_ref()
            .ok_or_else(|| MappingError::null_reference("delivery_method.short_name"))?;
        let total = order
            .total()
            .ok_or_else(|| MappingError::null_reference("delivery_method.price"))?;

        Ok(OrderSummary {
            id: order.id,
            buyer_email: order.buyer_email.clone(),
            created_at: order.created_at,
            ship_to_address: order.ship_to_address.clone(),
            delivery_method: delivery.short_name.clone(),
            order_items: ctx.map_each(&order.order_items)?,
            subtotal: order.subtotal,
            shipping_price: delivery.price,
            total,
            invoice: order.invoice.clone(),
            status: status_label(order.order_state).to_string(),
            parent: ctx.map_link(order.parent.as_ref())?.map(Box::new),
        })
    }
}
