use crate::config::AgentConfig;
use crate::report::{PositionLine, StatusReport};
use execution_engine::{Account, HistoryAnalyzer, Holdings, OrderExecutor};
use log::{debug, info, warn};
use trading::{Fill, Instrument, PriceSource, Result, TradingError};

/// Outcome of a single per-instrument decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    Bought { quantity: u32, price: f64 },
    Sold { quantity: u32, price: f64 },
    Held,
}

/// Tally of one trading session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub bought: usize,
    pub sold: usize,
    pub held: usize,
    /// Instruments whose decision failed and were skipped.
    pub failed: usize,
}

impl SessionSummary {
    pub fn processed(&self) -> usize {
        self.bought + self.sold + self.held + self.failed
    }
}

/// A single automated trader with a cash account and a holdings ledger.
///
/// The agent buys instruments the analyzer considers cheap, up to
/// `max_position` units each, and liquidates a whole position once the
/// analyzer considers it expensive.
pub struct TradingAgent {
    name: String,
    initial_capital: f64,
    account: Account,
    holdings: Holdings,
    executor: OrderExecutor,
    config: AgentConfig,
    fills: Vec<Fill>,
}

impl TradingAgent {
    pub fn new(name: impl Into<String>, initial_capital: f64) -> Result<Self> {
        Self::with_config(name, initial_capital, AgentConfig::default())
    }

    /// Fails with `InvalidBalance` when the starting capital is negative or NaN.
    pub fn with_config(
        name: impl Into<String>,
        initial_capital: f64,
        config: AgentConfig,
    ) -> Result<Self> {
        let name = name.into();
        let account = Account::new(initial_capital)?;
        info!(
            "Trading agent '{}' created with {:.2} starting capital",
            name, initial_capital
        );
        Ok(Self {
            name,
            initial_capital,
            account,
            holdings: Holdings::new(),
            executor: OrderExecutor::with_config(config.analyzer().clone()),
            config,
            fills: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn initial_capital(&self) -> f64 {
        self.initial_capital
    }

    pub fn holdings(&self) -> &Holdings {
        &self.holdings
    }

    pub fn holds(&self, name: &str) -> bool {
        self.holdings.holds(name)
    }

    pub fn quantity_held(&self, name: &str) -> u32 {
        self.holdings.quantity(name)
    }

    pub fn analyzer(&self) -> &HistoryAnalyzer {
        self.executor.analyzer()
    }

    /// Every order executed so far, oldest first.
    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// Decides whether to buy, sell or hold `instrument` and executes the
    /// resulting order. Buying and selling never both happen in one call.
    pub fn decide_and_trade(&mut self, instrument: Option<&Instrument>) -> Result<Decision> {
        let instrument = instrument.ok_or(TradingError::InvalidInstrument)?;
        let name = instrument.name();
        let price = instrument.price();
        let held = self.holdings.quantity(name);

        let analyzer = self.executor.analyzer();
        let cheap = analyzer.is_cheap(instrument);
        let expensive = analyzer.is_expensive(instrument);

        if cheap && self.account.can_afford(price) && held < self.config.max_position() {
            let quantity = self.buy_quantity(price, held);
            let fill = self
                .executor
                .buy(&mut self.account, Some(instrument), quantity)?;
            self.holdings.add(name, quantity);
            info!(
                "[{}] buys {}x {} @ {:.2}",
                self.name, quantity, name, fill.price
            );
            self.fills.push(fill);
            return Ok(Decision::Bought { quantity, price });
        }

        if expensive && held > 0 {
            let fill = self
                .executor
                .sell(&mut self.account, Some(instrument), held)?;
            self.holdings.remove(name);
            info!("[{}] sells {}x {} @ {:.2}", self.name, held, name, fill.price);
            self.fills.push(fill);
            return Ok(Decision::Sold {
                quantity: held,
                price,
            });
        }

        debug!("[{}] holds position in {}", self.name, name);
        Ok(Decision::Held)
    }

    /// Runs `decide_and_trade` over every instrument. A failing instrument is
    /// logged and skipped; the rest of the session carries on.
    pub fn trade_session<'a, I>(&mut self, instruments: I) -> SessionSummary
    where
        I: IntoIterator<Item = Option<&'a Instrument>>,
    {
        let mut summary = SessionSummary::default();
        for instrument in instruments {
            match self.decide_and_trade(instrument) {
                Ok(Decision::Bought { .. }) => summary.bought += 1,
                Ok(Decision::Sold { .. }) => summary.sold += 1,
                Ok(Decision::Held) => summary.held += 1,
                Err(e) => {
                    warn!(
                        "[{}] could not trade {}: {}",
                        self.name,
                        instrument.map(|i| i.name()).unwrap_or("<none>"),
                        e
                    );
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    /// Records the current quote of each instrument into the price history.
    /// Returns how many quotes were recorded.
    pub fn observe_market<'a, I>(&mut self, instruments: I) -> usize
    where
        I: IntoIterator<Item = &'a Instrument>,
    {
        let analyzer = self.executor.analyzer_mut();
        let mut recorded = 0;
        for instrument in instruments {
            match analyzer.record_price(instrument) {
                Ok(()) => recorded += 1,
                Err(e) => warn!("Skipping quote for {}: {}", instrument.name(), e),
            }
        }
        recorded
    }

    /// Cash plus the market value of every holding that `prices` can quote.
    pub fn total_asset_value<P: PriceSource + ?Sized>(&self, prices: &P) -> f64 {
        let (positions, unpriced) = self.holdings.market_value(prices);
        for name in unpriced {
            warn!("[{}] no quote for held instrument {}", self.name, name);
        }
        self.account.balance() + positions
    }

    pub fn status<P: PriceSource + ?Sized>(&self, prices: &P) -> StatusReport {
        let positions: Vec<PositionLine> = self
            .holdings
            .iter()
            .map(|(name, quantity)| {
                let price = prices.price_of(name);
                PositionLine {
                    instrument: name.to_string(),
                    quantity,
                    price,
                    value: price.map_or(0.0, |p| p * quantity as f64),
                }
            })
            .collect();
        let cash = self.account.balance();
        let total_value = cash + positions.iter().map(|p| p.value).sum::<f64>();

        StatusReport {
            name: self.name.clone(),
            cash,
            positions,
            total_value,
            initial_capital: self.initial_capital,
            profit_loss: total_value - self.initial_capital,
        }
    }

    pub fn status_report<P: PriceSource + ?Sized>(&self, prices: &P) -> String {
        self.status(prices).to_string()
    }

    // Only called once cheapness, affordability of one unit and room under
    // the cap are established, so the result is at least 1. The quotient is
    // settled against `can_afford` so the executor accepts what is sized here.
    fn buy_quantity(&self, price: f64, held: u32) -> u32 {
        let room_left = self.config.max_position().saturating_sub(held);
        let mut quantity = ((self.account.balance() / price).floor() as u32).min(room_left);
        while quantity > 1 && !self.account.can_afford(price * quantity as f64) {
            quantity -= 1;
        }
        while quantity < room_left && self.account.can_afford(price * (quantity + 1) as f64) {
            quantity += 1;
        }
        quantity.max(1)
    }
}
