use crate::model::order::Side;
use serde::{Deserialize, Serialize};

/// Report of an order that was executed against the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Unique id of the execution.
    pub id: String,
    /// Name of the traded instrument.
    pub instrument: String,
    pub side: Side,
    pub quantity: u32,
    /// Quoted price the order was filled at.
    pub price: f64,
    /// `price * quantity`: debited on a buy, credited on a sell.
    pub notional: f64,
    /// Unix millis.
    pub timestamp: i64,
}

impl Fill {
    pub fn new(
        id: impl Into<String>,
        instrument: impl Into<String>,
        side: Side,
        quantity: u32,
        price: f64,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            instrument: instrument.into(),
            side,
            quantity,
            price,
            notional: price * quantity as f64,
            timestamp,
        }
    }
}
