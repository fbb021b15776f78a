use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::{Address, DeliveryMethod, Order, OrderItem, OrderState, ProductItemOrdered};
use crate::error::MappingError;
use crate::order_item_projection::OrderItemSummary;
use crate::order_projection::OrderSummary;

use super::ProjectionSystem;

/// The demo order: one item, a default delivery method, and itself as parent.
pub fn sample_order() -> Arc<Order> {
    Order {
        id: 20,
        buyer_email: "bob@test.com".to_string(),
        created_at: Utc::now(),
        ship_to_address: Some(Address::new("Bob", "Bobbity", "Long Street 123", "071620", "New York")),
        delivery_method: Some(DeliveryMethod::default()),
        subtotal: Decimal::new(150, 0),
        order_state: OrderState::PaymentReceived,
        invoice: "Invoice nr 1".to_string(),
        payment_intent_id: "Payment Intent Id: 123-456".to_string(),
        order_items: vec![OrderItem {
            id: 1,
            ..OrderItem::new(
                ProductItemOrdered::new(30, "Name of Product", "Url to the Image"),
                Decimal::new(150, 0),
                1,
            )
        }],
        parent: None,
    }
    .into_self_parented()
}

/// Outcome of the sample run. Failures are kept as values for the caller to report.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleReport {
    pub summary: Result<OrderSummary, MappingError>,
    /// The whole order mapped straight to the item-level summary.
    pub item_probe: Result<OrderItemSummary, MappingError>,
}

impl SampleReport {
    pub fn diagnostics(&self) -> Vec<String> {
        let mut diagnostics = Vec::new();
        if let Err(e) = &self.summary {
            diagnostics.push(format!("Order -> OrderSummary: {e}"));
        }
        if let Err(e) = &self.item_probe {
            diagnostics.push(format!("Order -> OrderItemSummary: {e}"));
        }
        diagnostics
    }
}

#[instrument(skip_all, fields(order_id = order.id))]
pub fn run_sample(system: &ProjectionSystem, order: &Order) -> SampleReport {
    let summary = system.summarize(order);

    // No Order -> OrderItemSummary map is registered; this reports MissingTypeMap.
    let item_probe = system.mapper().map::<Order, OrderItemSummary>(order);

    let report = SampleReport { summary, item_probe };
    debug!(failures = report.diagnostics().len(), "Sample finished");
    report
}
