use async_trait::async_trait;

use crate::error::CryptoResult;

use super::dto::{CoinDetail, CoinRecord, Ticker};

/// Upstream coin data source. Every call is a single attempt.
#[async_trait]
pub trait CoinProvider: Send + Sync {
    /// All USD tickers, in provider order.
    async fn fetch_tickers(&self) -> CryptoResult<Vec<Ticker>>;

    async fn fetch_ticker(&self, coin_id: &str) -> CryptoResult<Ticker>;

    /// The full coin list used to build the symbol map.
    async fn fetch_coin_list(&self) -> CryptoResult<Vec<CoinRecord>>;

    async fn search_coins(&self, query: &str) -> CryptoResult<Vec<CoinRecord>>;

    async fn fetch_coin_details(&self, coin_id: &str) -> CryptoResult<CoinDetail>;

    /// Daily closing prices, oldest first. Returns at least `window` points
    /// when the provider has that much history.
    async fn fetch_price_history(&self, coin_id: &str, window: usize) -> CryptoResult<Vec<f64>>;
}
