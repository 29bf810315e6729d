use super::{Policy, RiskDecision};
use trading::{OrderRejection, OrderTicket};

/// Rejects tickets for zero units.
pub struct PositiveQuantityPolicy;

impl Policy for PositiveQuantityPolicy {
    fn name(&self) -> &str {
        "PositiveQuantity"
    }

    fn check(&self, ticket: &OrderTicket) -> RiskDecision {
        if ticket.quantity() == 0 {
            return RiskDecision::Rejected(OrderRejection::NonPositiveQuantity);
        }
        RiskDecision::Approved
    }
}
