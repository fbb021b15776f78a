use crate::domain::OrderState;

const STATUS_LABELS: [(OrderState, &str); 7] = [
    (OrderState::Pending, "Pending"),
    (OrderState::PaymentReceived, "PaymentReceived"),
    (OrderState::PaymentFailed, "PaymentFailed"),
    (OrderState::Shipped, "Shipped"),
    (OrderState::Completed, "Completed"),
    (OrderState::Cancelled, "Cancelled"),
    (OrderState::Expired, "Expired"),
];

/// The label an order state is rendered as in summaries.
pub fn status_label(state: OrderState) -> &'static str {
    STATUS_LABELS
        .iter()
        .find(|(candidate, _)| *candidate == state)
        .map(|(_, label)| *label)
        .unwrap_or_default()
}
