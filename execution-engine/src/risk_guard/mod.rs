use log::warn;
use trading::{Instrument, OrderRejection, OrderTicket, Result, Side};

pub mod instrument_present;
pub mod positive_quantity;

pub use instrument_present::InstrumentPresentPolicy;
pub use positive_quantity::PositiveQuantityPolicy;

#[derive(Debug, PartialEq)]
pub enum RiskDecision {
    Approved,
    Rejected(OrderRejection),
}

/// A single well-formedness rule applied to an order ticket.
///
/// Policies only look at the ticket itself, never at account state.
pub trait Policy: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, ticket: &OrderTicket) -> RiskDecision;
}

/// Ordered chain of policies; the first rejection wins.
pub struct OrderValidator {
    policies: Vec<Box<dyn Policy>>,
}

impl Default for OrderValidator {
    /// Instrument presence is checked before quantity, so a ticket that is
    /// wrong on both counts is always reported as a missing instrument.
    fn default() -> Self {
        let mut validator = Self::empty();
        validator.add_policy(Box::new(InstrumentPresentPolicy));
        validator.add_policy(Box::new(PositiveQuantityPolicy));
        validator
    }
}

impl OrderValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator with no rules at all.
    pub fn empty() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn add_policy(&mut self, policy: Box<dyn Policy>) {
        self.policies.push(policy);
    }

    pub fn check_order(&self, ticket: &OrderTicket) -> RiskDecision {
        for policy in &self.policies {
            match policy.check(ticket) {
                RiskDecision::Rejected(reason) => {
                    warn!(
                        "{} order for {} x{} rejected by policy {}: {}",
                        ticket.side(),
                        ticket.label(),
                        ticket.quantity(),
                        policy.name(),
                        reason
                    );
                    return RiskDecision::Rejected(reason);
                }
                RiskDecision::Approved => continue,
            }
        }
        RiskDecision::Approved
    }

    pub fn validate(&self, ticket: &OrderTicket) -> Result<()> {
        match self.check_order(ticket) {
            RiskDecision::Approved => Ok(()),
            RiskDecision::Rejected(reason) => Err(reason.into()),
        }
    }

    pub fn validate_buy(&self, instrument: Option<&Instrument>, quantity: u32) -> Result<()> {
        self.validate(&OrderTicket::new(instrument, quantity, Side::Buy))
    }

    pub fn validate_sell(&self, instrument: Option<&Instrument>, quantity: u32) -> Result<()> {
        self.validate(&OrderTicket::new(instrument, quantity, Side::Sell))
    }
}
