use super::{Policy, RiskDecision};
use trading::{OrderRejection, OrderTicket};

/// Rejects tickets that do not reference an instrument.
pub struct InstrumentPresentPolicy;

impl Policy for InstrumentPresentPolicy {
    fn name(&self) -> &str {
        "InstrumentPresent"
    }

    fn check(&self, ticket: &OrderTicket) -> RiskDecision {
        match ticket.instrument() {
            Some(_) => RiskDecision::Approved,
            None => RiskDecision::Rejected(OrderRejection::MissingInstrument),
        }
    }
}
