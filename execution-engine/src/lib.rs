//! Decision-support and accounting core of the trading simulation.
//!
//! * [`models`]: the cash [`Account`](models::Account), the
//!   [`Holdings`](models::Holdings) ledger and analyzer configuration.
//! * [`analyzer`]: rolling per-instrument price history with mean, deviation
//!   and trend classification.
//! * [`risk_guard`]: order well-formedness policies.
//! * [`engine`]: the [`OrderExecutor`](engine::OrderExecutor), sole mutator of
//!   the account balance for trading purposes.

pub mod analyzer;
pub mod engine;
pub mod models;
pub mod risk_guard;

pub use analyzer::{HistoryAnalyzer, Trend};
pub use engine::OrderExecutor;
pub use models::{Account, AnalyzerConfig, Holdings};
pub use risk_guard::OrderValidator;
