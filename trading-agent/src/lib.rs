//! The automated trader: decides per instrument whether to buy, sell or hold,
//! routes orders through the execution engine and keeps its holdings ledger.

pub mod agent;
pub mod config;
pub mod report;

pub use agent::{Decision, SessionSummary, TradingAgent};
pub use config::AgentConfig;
pub use report::{PositionLine, StatusReport};
