//! Coinpaprika data access: wire types, the provider seam and the REST client.

pub mod dto;
pub mod handler;
pub mod provider;

pub use dto::{CoinDetail, CoinRecord, Ticker};
pub use handler::Paprika;
pub use provider::CoinProvider;
