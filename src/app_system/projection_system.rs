use tracing::{info, instrument};

use crate::config::MapperConfig;
use crate::domain::{Order, OrderItem};
use crate::error::{ConfigurationError, MappingError};
use crate::mapping_framework::{configure, Mapper, RuleSet};
use crate::order_item_projection::{OrderItemSummary, OrderItemSummaryRule};
use crate::order_projection::{OrderSummary, OrderSummaryRule};

/// Every type map the application knows about. Not validated yet.
pub fn order_rule_set() -> Result<RuleSet, ConfigurationError> {
    configure(|rules| {
        rules
            .create_map(OrderSummaryRule)?
            .create_map(OrderItemSummaryRule)?;
        Ok(())
    })
}

/// The application's entry into the mapping engine.
///
/// Building one validates the order rules, so a `ProjectionSystem` only exists
/// for a complete rule set. Clones share the same rules.
#[derive(Clone)]
pub struct ProjectionSystem {
    mapper: Mapper,
}

impl ProjectionSystem {
    pub fn new(config: MapperConfig) -> Result<Self, ConfigurationError> {
        info!(?config, "Configuring projection rules");
        let mapper = Mapper::new(order_rule_set()?, config)?;
        info!(type_maps = mapper.rules().len(), "Projection rules validated");
        Ok(Self { mapper })
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    #[instrument(skip(self, order), fields(order_id = order.id))]
    pub fn summarize(&self, order: &Order) -> Result<OrderSummary, MappingError> {
        let summary: OrderSummary = self.mapper.map(order)?;
        info!(total = %summary.total, items = summary.order_items.len(), "Order summarized");
        Ok(summary)
    }

    pub fn summarize_items(&self, items: &[OrderItem]) -> Result<Vec<OrderItemSummary>, MappingError> {
        self.mapper.map_each(items)
    }
}
