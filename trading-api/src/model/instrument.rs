//! Defines the tradable instrument.
//!
//! An instrument is identified by its name alone. Its price is owned by the
//! market: the feed moves it between rounds, the trading core only reads it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named tradable asset with a current quoted price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Identity key (e.g. "Apple"). Never changes after construction.
    name: String,

    /// Current quote. The feed keeps this strictly positive.
    price: f64,
}

impl Instrument {
    /// Creates a new instrument quoted at `price`.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Moves the quote. Only the market side calls this.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.2}", self.name, self.price)
    }
}
