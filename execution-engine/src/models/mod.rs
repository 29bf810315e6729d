pub mod account;
pub mod config;
pub mod holdings;

pub use account::*;
pub use config::*;
pub use holdings::*;
