use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trading::PriceSource;

/// Instrument name -> units held.
///
/// Zero positions are never stored: reducing a position to zero removes the
/// entry, so `iter` only ever yields quantities of at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    positions: BTreeMap<String, u32>,
}

impl Holdings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, name: &str) -> u32 {
        self.positions.get(name).copied().unwrap_or(0)
    }

    pub fn holds(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Adds `quantity` units to the position; returns the new quantity.
    pub fn add(&mut self, name: &str, quantity: u32) -> u32 {
        if quantity == 0 {
            return self.quantity(name);
        }
        let entry = self.positions.entry(name.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
        *entry
    }

    /// Closes the position, returning how many units were held.
    pub fn remove(&mut self, name: &str) -> u32 {
        self.positions.remove(name).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Positions ordered by instrument name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.positions.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Owned copy of the ledger.
    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.positions.clone()
    }

    /// Market value of all positions that `prices` can quote. Positions
    /// without a quote are skipped and reported back by name.
    pub fn market_value<P: PriceSource + ?Sized>(&self, prices: &P) -> (f64, Vec<String>) {
        let mut value = 0.0;
        let mut unpriced = Vec::new();
        for (name, qty) in self.iter() {
            match prices.price_of(name) {
                Some(price) => value += qty as f64 * price,
                None => unpriced.push(name.to_string()),
            }
        }
        (value, unpriced)
    }
}
