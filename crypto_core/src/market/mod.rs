pub mod dto;
pub mod handler;

pub use dto::{PeriodChange, PriceChanges, PriceQuote, TopCoin, KNOWN_PERIODS};
pub use handler::CryptoService;
