//! Synthetic market: a bounded multiplicative random walk.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trading::{InstrumentRegistry, PriceFeed};

/// Quotes never fall below one cent.
const MIN_PRICE: f64 = 0.01;

pub struct RandomWalkFeed {
    rng: StdRng,
    volatility_pct: f64,
}

impl RandomWalkFeed {
    pub fn new(volatility_pct: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            volatility_pct,
        }
    }
}

impl PriceFeed for RandomWalkFeed {
    fn tick(&mut self, registry: &mut InstrumentRegistry) {
        for instrument in registry.iter_mut() {
            let swing: f64 = self.rng.gen_range(-1.0..1.0);
            let change = self.volatility_pct / 100.0 * swing;
            let next = (instrument.price() * (1.0 + change)).max(MIN_PRICE);
            debug!(
                "{}: {:.2} -> {:.2}",
                instrument.name(),
                instrument.price(),
                next
            );
            instrument.set_price(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trading::Instrument;

    fn registry() -> InstrumentRegistry {
        [Instrument::new("A", 100.0), Instrument::new("B", 0.011)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_moves_stay_within_volatility() {
        let mut feed = RandomWalkFeed::new(5.0, Some(7));
        let mut reg = registry();

        for _ in 0..200 {
            let before = reg.get("A").unwrap().price();
            feed.tick(&mut reg);
            let after = reg.get("A").unwrap().price();
            assert!(after >= before * 0.95 - 1e-9 && after <= before * 1.05 + 1e-9);
            assert!(reg.get("B").unwrap().price() >= MIN_PRICE);
        }
    }

    #[test]
    fn test_same_seed_same_path() {
        let mut a = registry();
        let mut b = registry();
        let mut feed_a = RandomWalkFeed::new(5.0, Some(42));
        let mut feed_b = RandomWalkFeed::new(5.0, Some(42));

        for _ in 0..10 {
            feed_a.tick(&mut a);
            feed_b.tick(&mut b);
        }
        assert_eq!(a.get("A").unwrap().price(), b.get("A").unwrap().price());
    }

    #[test]
    fn test_zero_volatility_is_flat() {
        let mut feed = RandomWalkFeed::new(0.0, Some(1));
        let mut reg = registry();
        feed.tick(&mut reg);
        assert_eq!(reg.get("A").unwrap().price(), 100.0);
    }
}
