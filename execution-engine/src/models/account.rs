use log::{debug, warn};
use serde::Serialize;
use trading::{Result, TradingError};

/// Relative slack allowed when comparing a cost against the balance, so that
/// a cost like `3 * 138.15` still covers a balance of `414.45`.
const MONEY_TOLERANCE: f64 = 1e-9;

/// Single-currency cash account.
///
/// `credit` and `debit` are the only ways to change the balance. A debit that
/// would leave the balance negative is rejected before anything is mutated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Account {
    balance: f64,
}

impl Account {
    /// Opens an account. Fails with `InvalidBalance` unless the opening
    /// balance is finite and not negative.
    pub fn new(opening_balance: f64) -> Result<Self> {
        if !(opening_balance >= 0.0 && opening_balance.is_finite()) {
            warn!("Rejected opening balance {}", opening_balance);
            return Err(TradingError::InvalidBalance {
                balance: opening_balance,
            });
        }
        Ok(Self {
            balance: opening_balance,
        })
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Whether a debit of `amount` would succeed, give or take float noise.
    pub fn can_afford(&self, amount: f64) -> bool {
        amount <= self.balance + self.balance.abs().max(1.0) * MONEY_TOLERANCE
    }

    pub fn credit(&mut self, amount: f64) -> Result<()> {
        Self::check_amount(amount)?;
        self.balance += amount;
        debug!("Credited {:.2}, balance now {:.2}", amount, self.balance);
        Ok(())
    }

    pub fn debit(&mut self, amount: f64) -> Result<()> {
        Self::check_amount(amount)?;
        if !self.can_afford(amount) {
            warn!(
                "Debit of {:.2} rejected: balance is only {:.2}",
                amount, self.balance
            );
            return Err(TradingError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }
        self.balance = (self.balance - amount).max(0.0);
        debug!("Debited {:.2}, balance now {:.2}", amount, self.balance);
        Ok(())
    }

    // Written as a negated comparison so NaN is rejected too.
    fn check_amount(amount: f64) -> Result<()> {
        if !(amount > 0.0) {
            warn!("Rejected non-positive amount {}", amount);
            return Err(TradingError::InvalidAmount { amount });
        }
        Ok(())
    }
}
