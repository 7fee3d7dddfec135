use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::paprika::Ticker;

/// Percent-change periods reported by the ticker endpoint, shortest first.
pub const KNOWN_PERIODS: [&str; 9] = ["15m", "30m", "1h", "6h", "12h", "24h", "7d", "30d", "1y"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceQuote {
    pub name: String,
    pub symbol: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopCoin {
    pub rank: Option<u32>,
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub market_cap: Option<f64>,
    pub percent_change_24h: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeriodChange {
    pub period: String,
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceChanges {
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub changes: Vec<PeriodChange>,
}

impl From<&Ticker> for PriceQuote {
    fn from(ticker: &Ticker) -> Self {
        PriceQuote {
            name: ticker.name.clone(),
            symbol: ticker.symbol.clone(),
            price: ticker.price,
        }
    }
}

impl From<&Ticker> for TopCoin {
    fn from(ticker: &Ticker) -> Self {
        TopCoin {
            rank: ticker.rank,
            id: ticker.id.clone(),
            name: ticker.name.clone(),
            symbol: ticker.symbol.clone(),
            price: ticker.price,
            market_cap: ticker.market_cap,
            percent_change_24h: ticker.percent_change("24h"),
        }
    }
}
