use crate::analyzer::HistoryAnalyzer;
use crate::models::{Account, AnalyzerConfig};
use crate::risk_guard::OrderValidator;
use log::{info, warn};
use trading::{Fill, Instrument, Result, Side, TradingError};
use uuid::Uuid;

/// Executes orders against a cash account at the instrument's quoted price.
///
/// Every step that can fail runs before the account is touched, so a failed
/// order leaves both the account and the price history unchanged. A filled
/// order records its price into the history analyzer owned by the executor.
#[derive(Default)]
pub struct OrderExecutor {
    validator: OrderValidator,
    analyzer: HistoryAnalyzer,
}

impl OrderExecutor {
    pub fn new(validator: OrderValidator, analyzer: HistoryAnalyzer) -> Self {
        Self {
            validator,
            analyzer,
        }
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self::new(OrderValidator::default(), HistoryAnalyzer::new(config))
    }

    pub fn analyzer(&self) -> &HistoryAnalyzer {
        &self.analyzer
    }

    pub fn analyzer_mut(&mut self) -> &mut HistoryAnalyzer {
        &mut self.analyzer
    }

    pub fn buy(
        &mut self,
        account: &mut Account,
        instrument: Option<&Instrument>,
        quantity: u32,
    ) -> Result<Fill> {
        self.validator.validate_buy(instrument, quantity)?;
        let instrument = instrument.ok_or(TradingError::InvalidInstrument)?;

        let price = instrument.price();
        let total_cost = price * quantity as f64;

        if !account.can_afford(total_cost) {
            warn!(
                "BUY {} x{} needs {:.2}, account holds {:.2}",
                instrument.name(),
                quantity,
                total_cost,
                account.balance()
            );
            return Err(TradingError::InsufficientFunds {
                required: total_cost,
                available: account.balance(),
            });
        }

        account.debit(total_cost)?;
        self.settle(instrument, Side::Buy, quantity)
    }

    /// Sells at the quoted price. Whether the seller actually holds the
    /// units is the caller's business.
    pub fn sell(
        &mut self,
        account: &mut Account,
        instrument: Option<&Instrument>,
        quantity: u32,
    ) -> Result<Fill> {
        self.validator.validate_sell(instrument, quantity)?;
        let instrument = instrument.ok_or(TradingError::InvalidInstrument)?;

        let proceeds = instrument.price() * quantity as f64;
        account.credit(proceeds)?;
        self.settle(instrument, Side::Sell, quantity)
    }

    fn settle(&mut self, instrument: &Instrument, side: Side, quantity: u32) -> Result<Fill> {
        // Cannot fail here: a non-positive price was already refused by the
        // account as a non-positive amount.
        self.analyzer.record_price(instrument)?;

        let fill = Fill::new(
            Uuid::new_v4().to_string(),
            instrument.name(),
            side,
            quantity,
            instrument.price(),
            chrono::Utc::now().timestamp_millis(),
        );
        info!(
            "{} {} x{} @ {:.2} (notional {:.2})",
            fill.side, fill.instrument, fill.quantity, fill.price, fill.notional
        );
        Ok(fill)
    }
}

#[cfg(test)]
mod tests;
