//! Defines the `PriceFeed` trait for market price updates.
//!
//! The feed is the only writer of quoted prices. It is driven once per round,
//! before the trading agent looks at the market, and is free to move prices
//! however it likes as long as every quote stays strictly positive.

use crate::model::instrument_db::InstrumentRegistry;

/// A trait for components that move market prices.
///
/// # Examples
///
/// ```
/// use trading::{Instrument, InstrumentRegistry, PriceFeed};
///
/// struct Inflation;
///
/// impl PriceFeed for Inflation {
///     fn tick(&mut self, registry: &mut InstrumentRegistry) {
///         for instrument in registry.iter_mut() {
///             let next = instrument.price() * 1.01;
///             instrument.set_price(next);
///         }
///     }
/// }
///
/// let mut registry: InstrumentRegistry = [Instrument::new("SAP", 100.0)].into_iter().collect();
/// Inflation.tick(&mut registry);
/// assert!((registry.get("SAP").unwrap().price() - 101.0).abs() < 1e-9);
/// ```
pub trait PriceFeed {
    /// Applies one round of price changes to the registry.
    fn tick(&mut self, registry: &mut InstrumentRegistry);
}
