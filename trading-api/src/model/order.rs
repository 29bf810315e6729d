use crate::model::instrument::Instrument;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// An instruction to buy or sell an instrument.
///
/// Tickets only live for the duration of one validate-then-execute call.
/// `instrument` is `None` when the caller had nothing to trade.
#[derive(Debug, Clone, Copy)]
pub struct OrderTicket<'a> {
    instrument: Option<&'a Instrument>,
    quantity: u32,
    side: Side,
}

impl<'a> OrderTicket<'a> {
    pub fn new(instrument: Option<&'a Instrument>, quantity: u32, side: Side) -> Self {
        Self {
            instrument,
            quantity,
            side,
        }
    }

    pub fn buy(instrument: Option<&'a Instrument>, quantity: u32) -> Self {
        Self::new(instrument, quantity, Side::Buy)
    }

    pub fn sell(instrument: Option<&'a Instrument>, quantity: u32) -> Self {
        Self::new(instrument, quantity, Side::Sell)
    }

    pub fn instrument(&self) -> Option<&'a Instrument> {
        self.instrument
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Name of the referenced instrument, or `"<none>"` for log lines.
    pub fn label(&self) -> &str {
        self.instrument.map(|i| i.name()).unwrap_or("<none>")
    }
}
