pub mod dto;
pub mod handler;

pub use dto::CoinMap;
pub use handler::CoinMapCache;
