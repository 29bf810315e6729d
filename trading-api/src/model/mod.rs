pub mod execution;
pub mod instrument;
pub mod instrument_db;
pub mod order;

pub use execution::Fill;
pub use instrument::Instrument;
pub use instrument_db::InstrumentRegistry;
pub use order::{OrderTicket, Side};
