#[cfg(test)]
mod tests {
    use crate::app_system::{order_rule_set, run_sample, sample_order, ProjectionSystem};
    use crate::config::{CyclePolicy, MapperConfig};
    use crate::domain::Order;
    use crate::error::{ConfigurationError, MappingError};
    use crate::fixtures::{item, order_mapper, order_with_items};
    use crate::mapping_framework::{configure, Mapper, MappingContext, MemberRule, Projection};
    use crate::order_item_projection::{OrderItemSummary, OrderItemSummaryRule};
    use crate::order_projection::{OrderSummary, OrderSummaryRule};
    use rust_decimal::Decimal;

    #[test]
    fn test_sample_run() {
        // 1. Setup
        let system = ProjectionSystem::new(MapperConfig::default()).unwrap();
        let order = sample_order();

        // 2. Run
        let report = run_sample(&system, &order);

        // 3. Verify the summary
        let summary = report.summary.clone().unwrap();
        assert_eq!(summary.id, 20);
        assert_eq!(summary.buyer_email, "bob@test.com");
        assert_eq!(summary.subtotal, Decimal::new(150, 0));
        assert_eq!(summary.shipping_price, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::new(150, 0));
        assert_eq!(summary.status, "PaymentReceived");
        assert_eq!(summary.invoice, "Invoice nr 1");
        assert_eq!(summary.delivery_method, "");
        assert_eq!(summary.parent, None);
        assert_eq!(
            summary.ship_to_address.as_ref().map(|a| a.city()),
            Some("New York")
        );

        assert_eq!(
            summary.order_items,
            vec![OrderItemSummary {
                product_id: 30,
                price: Decimal::new(150, 0),
                product_name: "Name of Product".to_string(),
                image_url: "Url to the Image".to_string(),
                quantity: 1,
            }]
        );

        // 4. Verify the item probe reports the missing type map
        assert_eq!(
            report.item_probe,
            Err(MappingError::MissingTypeMap {
                source_type: "Order".to_string(),
                destination_type: "OrderItemSummary".to_string(),
            })
        );
        assert_eq!(
            report.diagnostics(),
            vec!["Order -> OrderItemSummary: Missing type map configuration: Order -> OrderItemSummary".to_string()]
        );
    }

    #[test]
    fn test_sample_with_strict_cycles_reports_the_cycle() {
        let system = ProjectionSystem::new(MapperConfig::default().with_cycle_policy(CyclePolicy::Reject)).unwrap();

        let report = run_sample(&system, &sample_order());

        assert_eq!(
            report.summary,
            Err(MappingError::CycleDetected { type_name: "Order".to_string() })
        );
        assert_eq!(report.diagnostics().len(), 2);
    }

    #[test]
    fn test_incomplete_rules_never_reach_mapping() {
        // Order map registered without the item map it depends on
        let rules = configure(|rules| {
            rules.create_map(OrderSummaryRule)?;
            Ok(())
        })
        .unwrap();

        let result = Mapper::new(rules, MapperConfig::default());

        assert_eq!(
            result.err(),
            Some(ConfigurationError::MissingNestedMap {
                pair: "Order -> OrderSummary".to_string(),
                member: "order_items".to_string(),
                nested: "OrderItem -> OrderItemSummary".to_string(),
            })
        );
    }

    /// The real order rule with the `total` member left out.
    struct OrderSummaryWithoutTotal;

    impl Projection for OrderSummaryWithoutTotal {
        type Source = Order;
        type Destination = OrderSummary;

        fn members(&self) -> Vec<MemberRule> {
            OrderSummaryRule
                .members()
                .into_iter()
                .filter(|rule| rule.destination != "total")
                .collect()
        }

        fn project(&self, order: &Order, ctx: &mut MappingContext<'_>) -> Result<OrderSummary, MappingError> {
            OrderSummaryRule.project(order, ctx)
        }
    }

    #[test]
    fn test_unmapped_member_fails_before_mapping() {
        let rules = configure(|rules| {
            rules
                .create_map(OrderSummaryWithoutTotal)?
                .create_map(OrderItemSummaryRule)?;
            Ok(())
        })
        .unwrap();

        let expected = ConfigurationError::UnmappedMembers {
            pair: "Order -> OrderSummary".to_string(),
            members: vec!["total".to_string()],
        };
        assert_eq!(rules.validate(), Err(expected.clone()));
        assert_eq!(Mapper::new(rules, MapperConfig::default()).err(), Some(expected));
    }

    #[test]
    fn test_item_only_rules_are_complete() {
        let rules = configure(|rules| {
            rules.create_map(OrderItemSummaryRule)?;
            Ok(())
        })
        .unwrap();
        assert_eq!(rules.validate(), Ok(()));
        assert!(!rules.contains::<Order, OrderSummary>());
        assert_eq!(order_rule_set().unwrap().len(), 2);
    }

    #[test]
    fn test_repeated_mapping_is_identical() {
        let mapper = order_mapper(MapperConfig::default());
        let order = sample_order();

        let first: OrderSummary = mapper.map(order.as_ref()).unwrap();
        let second: OrderSummary = mapper.map(order.as_ref()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_mapper_is_shared_across_threads() {
        let system = ProjectionSystem::new(MapperConfig::default()).unwrap();
        let orders: Vec<Order> = (1..=4)
            .map(|n| Order { id: n, ..order_with_items(vec![item(n, 10 * n as i64, 1)]) })
            .collect();

        let totals: Vec<Decimal> = std::thread::scope(|scope| {
            let handles: Vec<_> = orders
                .iter()
                .map(|order| {
                    let system = system.clone();
                    scope.spawn(move || system.summarize(order).map(|summary| summary.total))
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap().unwrap()).collect()
        });

        assert_eq!(
            totals,
            vec![Decimal::new(20, 0), Decimal::new(30, 0), Decimal::new(40, 0), Decimal::new(50, 0)]
        );
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary: OrderSummary = order_mapper(MapperConfig::default())
            .map(&order_with_items(vec![item(30, 150, 1)]))
            .unwrap();

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["buyerEmail"], "alice@example.com");
        assert_eq!(json["deliveryMethod"], "UPS1");
        assert_eq!(json["orderItems"][0]["productId"], 30);
        assert_eq!(json["shipToAddress"]["postalCode"], "10001");
        assert!(json.get("parent").is_none());
    }
}
