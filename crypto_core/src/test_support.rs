use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Map;

use crate::error::{CryptoError, CryptoResult};
use crate::paprika::{CoinDetail, CoinProvider, CoinRecord, Ticker};

/// In-memory provider. `None` for coins or search makes that call fail.
#[derive(Default)]
pub struct FakeProvider {
    pub coins: Option<Vec<CoinRecord>>,
    pub search_results: Option<Vec<CoinRecord>>,
    pub tickers: Vec<Ticker>,
    pub history: HashMap<String, Vec<f64>>,
    pub coin_list_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub history_windows: std::sync::Mutex<Vec<usize>>,
}

impl FakeProvider {
    pub fn with_coins(coins: Vec<CoinRecord>) -> Self {
        Self {
            coins: Some(coins),
            ..Default::default()
        }
    }

    pub fn search(mut self, results: Vec<CoinRecord>) -> Self {
        self.search_results = Some(results);
        self
    }

    pub fn ticker(mut self, ticker: Ticker) -> Self {
        self.tickers.push(ticker);
        self
    }

    pub fn history(mut self, coin_id: &str, prices: Vec<f64>) -> Self {
        self.history.insert(coin_id.to_string(), prices);
        self
    }

    pub fn coin_list_calls(&self) -> usize {
        self.coin_list_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

pub fn coin(id: &str, symbol: &str, rank: Option<u32>, is_active: bool) -> CoinRecord {
    CoinRecord {
        id: id.to_string(),
        name: id.to_string(),
        symbol: symbol.to_string(),
        rank,
        is_active,
    }
}

pub fn ticker(id: &str, name: &str, symbol: &str, rank: Option<u32>, price: f64) -> Ticker {
    let quotes = BTreeMap::from([
        ("1h".to_string(), 0.5),
        ("24h".to_string(), -2.25),
        ("7d".to_string(), 10.0),
    ]);

    Ticker {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        rank,
        price,
        market_cap: Some(price * 1000.0),
        volume_24h: None,
        quotes,
    }
}

#[async_trait]
impl CoinProvider for FakeProvider {
    async fn fetch_tickers(&self) -> CryptoResult<Vec<Ticker>> {
        Ok(self.tickers.clone())
    }

    async fn fetch_ticker(&self, coin_id: &str) -> CryptoResult<Ticker> {
        self.tickers
            .iter()
            .find(|ticker| ticker.id == coin_id)
            .cloned()
            .ok_or_else(|| CryptoError::NotFound(format!("/tickers/{} not found", coin_id)))
    }

    async fn fetch_coin_list(&self) -> CryptoResult<Vec<CoinRecord>> {
        self.coin_list_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        self.coins
            .clone()
            .ok_or_else(|| CryptoError::Transport("connection refused".to_string()))
    }

    async fn search_coins(&self, _query: &str) -> CryptoResult<Vec<CoinRecord>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        self.search_results
            .clone()
            .ok_or_else(|| CryptoError::Transport("connection refused".to_string()))
    }

    async fn fetch_coin_details(&self, coin_id: &str) -> CryptoResult<CoinDetail> {
        let ticker = self.fetch_ticker(coin_id).await?;

        Ok(CoinDetail {
            id: ticker.id,
            name: ticker.name,
            symbol: ticker.symbol,
            rank: ticker.rank,
            is_active: true,
            coin_type: Some("coin".to_string()),
            description: None,
            started_at: None,
            extra: Map::new(),
        })
    }

    async fn fetch_price_history(&self, coin_id: &str, window: usize) -> CryptoResult<Vec<f64>> {
        if let Ok(mut windows) = self.history_windows.lock() {
            windows.push(window);
        }

        self.history
            .get(coin_id)
            .cloned()
            .ok_or_else(|| CryptoError::NotFound(format!("history for {} not found", coin_id)))
    }
}
