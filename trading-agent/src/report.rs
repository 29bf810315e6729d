use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionLine {
    pub instrument: String,
    pub quantity: u32,
    /// Current quote; `None` when the market no longer quotes the name.
    pub price: Option<f64>,
    pub value: f64,
}

/// Point-in-time snapshot of an agent's cash, positions and performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub name: String,
    pub cash: f64,
    pub positions: Vec<PositionLine>,
    pub total_value: f64,
    pub initial_capital: f64,
    pub profit_loss: f64,
}

impl StatusReport {
    pub fn profit_loss_pct(&self) -> f64 {
        if self.initial_capital == 0.0 {
            return 0.0;
        }
        self.profit_loss / self.initial_capital * 100.0
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Status of {} ===", self.name)?;
        writeln!(f, "Cash balance: {:>14.2}", self.cash)?;
        writeln!(f, "Holdings:")?;
        if self.positions.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for line in &self.positions {
            match line.price {
                Some(price) => writeln!(
                    f,
                    "  {:<18} {:>3} x {:>9.2} = {:>11.2}",
                    line.instrument, line.quantity, price, line.value
                )?,
                None => writeln!(
                    f,
                    "  {:<18} {:>3} x {:>9} = {:>11}",
                    line.instrument, line.quantity, "n/a", "n/a"
                )?,
            }
        }
        writeln!(f, "Total assets: {:>14.2}", self.total_value)?;
        write!(
            f,
            "Profit/Loss:  {:>+14.2} ({:+.2}%)",
            self.profit_loss,
            self.profit_loss_pct()
        )
    }
}
