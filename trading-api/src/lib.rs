//! Shared vocabulary of the market simulation: instruments and their registry,
//! order tickets, fills, the error taxonomy, and the traits through which the
//! price feed and the valuation side talk to the market.

pub mod error;
pub mod model;
pub mod traits;

pub use error::{OrderRejection, Result, TradingError};
pub use model::execution::Fill;
pub use model::instrument::Instrument;
pub use model::instrument_db::InstrumentRegistry;
pub use model::order::{OrderTicket, Side};
pub use traits::data_feed::PriceFeed;
pub use traits::price_source::PriceSource;
