pub mod data_feed;
pub mod price_source;
