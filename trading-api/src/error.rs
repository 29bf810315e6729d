use thiserror::Error;

/// Why an order ticket failed well-formedness checks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRejection {
    /// The order did not reference an instrument.
    #[error("null instrument")]
    MissingInstrument,

    /// The order asked for zero units.
    #[error("non-positive quantity")]
    NonPositiveQuantity,
}

/// Error type shared by the account, analyzer, executor and agent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradingError {
    /// Caller error: the order itself is malformed.
    #[error("invalid order: {0}")]
    InvalidOrder(#[from] OrderRejection),

    /// Caller error: credit/debit amounts must be strictly positive.
    #[error("invalid amount {amount}: must be greater than zero")]
    InvalidAmount { amount: f64 },

    /// Caller error: an account cannot open with a negative or NaN balance.
    #[error("invalid opening balance {balance}: must be zero or positive")]
    InvalidBalance { balance: f64 },

    /// Business outcome: the account cannot cover the requested debit.
    #[error("insufficient funds: required {required:.2}, available {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    /// Caller error: an operation was handed no instrument.
    #[error("instrument must not be null")]
    InvalidInstrument,

    /// Caller error: prices recorded into history must be strictly positive.
    #[error("invalid price {price} for instrument '{name}': must be greater than zero")]
    InvalidPrice { name: String, price: f64 },

    /// The registry has no instrument under this name.
    #[error("unknown instrument '{0}'")]
    UnknownInstrument(String),
}

/// A specialized Result type for trading operations.
pub type Result<T> = std::result::Result<T, TradingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_converts_into_invalid_order() {
        let err: TradingError = OrderRejection::MissingInstrument.into();
        assert_eq!(err, TradingError::InvalidOrder(OrderRejection::MissingInstrument));
        assert_eq!(err.to_string(), "invalid order: null instrument");
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = TradingError::InsufficientFunds {
            required: 1500.0,
            available: 999.5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: required 1500.00, available 999.50"
        );
    }
}
