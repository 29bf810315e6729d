//! In-memory registry of the instruments quoted by the market.
//!
//! The registry is the single owner of live prices. The feed holds it mutably
//! between rounds; everything else borrows it read-only.

use crate::error::{Result, TradingError};
use crate::model::Instrument;
use crate::traits::price_source::PriceSource;
use std::collections::HashMap;

/// Insertion-ordered collection of instruments, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct InstrumentRegistry {
    instruments: Vec<Instrument>,
    index: HashMap<String, usize>,
}

impl InstrumentRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            instruments: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds an instrument, replacing any existing one with the same name
    /// while keeping its original position.
    pub fn insert(&mut self, instrument: Instrument) {
        match self.index.get(instrument.name()) {
            Some(&slot) => self.instruments[slot] = instrument,
            None => {
                self.index
                    .insert(instrument.name().to_string(), self.instruments.len());
                self.instruments.push(instrument);
            }
        }
    }

    /// Retrieves an instrument by name.
    pub fn get(&self, name: &str) -> Option<&Instrument> {
        self.index.get(name).map(|&slot| &self.instruments[slot])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Instrument> {
        match self.index.get(name) {
            Some(&slot) => self.instruments.get_mut(slot),
            None => None,
        }
    }

    /// Updates the quote of a known instrument.
    pub fn set_price(&mut self, name: &str, price: f64) -> Result<()> {
        let instrument = self
            .get_mut(name)
            .ok_or_else(|| TradingError::UnknownInstrument(name.to_string()))?;
        instrument.set_price(price);
        Ok(())
    }

    /// Iterates instruments in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instrument> {
        self.instruments.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Instrument> {
        self.instruments.iter_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.instruments.iter().map(|i| i.name())
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl PriceSource for InstrumentRegistry {
    fn price_of(&self, name: &str) -> Option<f64> {
        self.get(name).map(|i| i.price())
    }
}

impl FromIterator<Instrument> for InstrumentRegistry {
    fn from_iter<T: IntoIterator<Item = Instrument>>(iter: T) -> Self {
        let mut registry = Self::new();
        for instrument in iter {
            registry.insert(instrument);
        }
        registry
    }
}
