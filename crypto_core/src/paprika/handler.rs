use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::{debug, error, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ProviderConfig;
use crate::error::{CryptoError, CryptoResult};

use super::dto::{
    CoinDetail, CoinRecord, HistoricalTick, SearchResponse, Ticker, TickerResponse,
};
use super::provider::CoinProvider;

/// Coinpaprika REST client.
#[derive(Clone)]
pub struct Paprika {
    client: Client,
    config: ProviderConfig,
}

impl Paprika {
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::new();

        Self { client, config }
    }

    pub fn from_env() -> Self {
        Self::new(ProviderConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> CryptoResult<T> {
        let url = self.url(path);
        debug!("🌐 Requesting {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Network error when calling Coinpaprika API: {}", e);
                CryptoError::from(e)
            })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!("Coinpaprika returned 404 for {}", url);
            return Err(CryptoError::NotFound(format!("{} not found", path)));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                "Coinpaprika request failed with status: {} - {}",
                status, error_text
            );
            return Err(CryptoError::Transport(format!(
                "HTTP error occurred: {} - {}",
                status, error_text
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

fn coin_path(prefix: &str, coin_id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(coin_id))
}

#[async_trait]
impl CoinProvider for Paprika {
    async fn fetch_tickers(&self) -> CryptoResult<Vec<Ticker>> {
        let raw: Vec<Value> = self.get_json("/tickers", &[("quotes", "USD")]).await?;

        let tickers = raw
            .into_iter()
            .filter_map(|value| {
                let parsed = serde_json::from_value::<TickerResponse>(value)
                    .map_err(CryptoError::from)
                    .and_then(Ticker::try_from);

                match parsed {
                    Ok(ticker) => Some(ticker),
                    Err(e) => {
                        warn!("Skipping malformed ticker: {}", e);
                        None
                    }
                }
            })
            .collect();

        Ok(tickers)
    }

    async fn fetch_ticker(&self, coin_id: &str) -> CryptoResult<Ticker> {
        let response: TickerResponse = self
            .get_json(&coin_path("/tickers", coin_id), &[("quotes", "USD")])
            .await?;

        Ticker::try_from(response)
    }

    async fn fetch_coin_list(&self) -> CryptoResult<Vec<CoinRecord>> {
        self.get_json("/coins", &[]).await
    }

    async fn search_coins(&self, query: &str) -> CryptoResult<Vec<CoinRecord>> {
        let response: SearchResponse = self
            .get_json("/search", &[("q", query), ("c", "currencies")])
            .await?;

        Ok(response.currencies)
    }

    async fn fetch_coin_details(&self, coin_id: &str) -> CryptoResult<CoinDetail> {
        self.get_json(&coin_path("/coins", coin_id), &[]).await
    }

    async fn fetch_price_history(&self, coin_id: &str, window: usize) -> CryptoResult<Vec<f64>> {
        let start = i64::try_from(window)
            .ok()
            .and_then(|days| Duration::try_days(days.checked_add(2)?))
            .and_then(|span| Utc::now().checked_sub_signed(span))
            .ok_or_else(|| {
                CryptoError::InvalidArgument(format!("history window of {} days is too large", window))
            })?
            .format("%Y-%m-%d")
            .to_string();

        let path = format!("{}/historical", coin_path("/tickers", coin_id));
        let mut ticks: Vec<HistoricalTick> = self
            .get_json(
                &path,
                &[
                    ("start", start.as_str()),
                    ("interval", "1d"),
                    ("quote", "usd"),
                ],
            )
            .await?;

        ticks.sort_by_key(|tick| tick.timestamp);

        Ok(ticks.into_iter().map(|tick| tick.price).collect())
    }
}
