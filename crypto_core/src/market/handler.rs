use std::sync::Arc;

use log::debug;

use crate::error::{CryptoError, CryptoResult};
use crate::paprika::{CoinDetail, CoinProvider, CoinRecord, Paprika, Ticker};
use crate::resolver::Resolver;
use crate::ta::types::MAX_PERIOD;
use crate::ta::{
    calculate_rsi, calculate_sma, rsi_signal, sma_signal, Indicator, IndicatorResult,
};

use super::dto::{PeriodChange, PriceChanges, PriceQuote, TopCoin, KNOWN_PERIODS};

/// Market operations shared by the CLI and the HTTP wrapper.
pub struct CryptoService {
    provider: Arc<dyn CoinProvider>,
    resolver: Resolver,
}

impl CryptoService {
    pub fn new(provider: Arc<dyn CoinProvider>) -> Self {
        let resolver = Resolver::new(Arc::clone(&provider));

        Self { provider, resolver }
    }

    pub fn from_env() -> Self {
        Self::new(Arc::new(Paprika::from_env()))
    }

    /// Rebuilds the symbol map and returns how many symbols it holds.
    pub async fn refresh_coin_map(&self) -> usize {
        self.resolver.cache().refresh().await.len()
    }

    pub async fn price(&self, coin: &str) -> CryptoResult<PriceQuote> {
        let ticker = self.ticker(coin).await?;

        Ok(PriceQuote::from(&ticker))
    }

    pub async fn ticker(&self, coin: &str) -> CryptoResult<Ticker> {
        let coin_id = self.resolver.resolve(coin).await;
        debug!("Resolved '{}' to '{}'", coin, coin_id);

        self.provider
            .fetch_ticker(&coin_id)
            .await
            .map_err(|e| coin_not_found(coin, e))
    }

    /// Tickers ordered by rank, unranked last.
    pub async fn tickers(&self, limit: usize) -> CryptoResult<Vec<Ticker>> {
        let mut tickers = self.provider.fetch_tickers().await?;

        tickers.sort_by_key(|ticker| ticker.rank.map_or(u64::MAX, u64::from));
        tickers.truncate(limit);

        Ok(tickers)
    }

    pub async fn top_coins(&self, limit: usize) -> CryptoResult<Vec<TopCoin>> {
        let tickers = self.tickers(limit).await?;

        Ok(tickers.iter().map(TopCoin::from).collect())
    }

    pub async fn search(&self, query: &str) -> CryptoResult<Vec<CoinRecord>> {
        if query.trim().is_empty() {
            return Err(CryptoError::InvalidArgument(
                "search query must not be empty".to_string(),
            ));
        }

        self.provider.search_coins(query).await
    }

    pub async fn details(&self, coin: &str) -> CryptoResult<CoinDetail> {
        let coin_id = self.resolver.resolve(coin).await;

        self.provider
            .fetch_coin_details(&coin_id)
            .await
            .map_err(|e| coin_not_found(coin, e))
    }

    /// Percent changes for the requested periods, or every reported period
    /// when none are given.
    pub async fn changes(&self, coin: &str, periods: &[String]) -> CryptoResult<PriceChanges> {
        let ticker = self.ticker(coin).await?;

        let periods: Vec<String> = if periods.is_empty() {
            KNOWN_PERIODS
                .iter()
                .filter(|period| ticker.quotes.contains_key(**period))
                .map(|period| period.to_string())
                .collect()
        } else {
            periods
                .iter()
                .map(|period| period.trim().to_lowercase())
                .collect()
        };

        let changes = periods
            .into_iter()
            .map(|period| PeriodChange {
                percent: ticker.percent_change(&period),
                period,
            })
            .collect();

        Ok(PriceChanges {
            name: ticker.name,
            symbol: ticker.symbol,
            price: ticker.price,
            changes,
        })
    }

    pub async fn sma(&self, coin: &str, period: usize) -> CryptoResult<IndicatorResult> {
        check_period("SMA", period)?;

        let (ticker, prices) = self.history(coin, period).await?;
        let value = calculate_sma(&prices, period)?;

        Ok(IndicatorResult {
            coin_name: ticker.name,
            coin_symbol: ticker.symbol,
            indicator: Indicator::Sma,
            period,
            value,
            current_price: Some(ticker.price),
            signal: sma_signal(ticker.price, value),
        })
    }

    pub async fn rsi(&self, coin: &str, period: usize) -> CryptoResult<IndicatorResult> {
        check_period("RSI", period)?;

        let (ticker, prices) = self.history(coin, period.saturating_add(1)).await?;
        let value = calculate_rsi(&prices, period)?;

        Ok(IndicatorResult {
            coin_name: ticker.name,
            coin_symbol: ticker.symbol,
            indicator: Indicator::Rsi,
            period,
            value,
            current_price: Some(ticker.price),
            signal: rsi_signal(value),
        })
    }

    async fn history(&self, coin: &str, points: usize) -> CryptoResult<(Ticker, Vec<f64>)> {
        let ticker = self.ticker(coin).await?;

        let prices = self
            .provider
            .fetch_price_history(&ticker.id, points)
            .await
            .map_err(|e| coin_not_found(coin, e))?;
        debug!("Fetched {} price points for '{}'", prices.len(), ticker.id);

        Ok((ticker, prices))
    }
}

fn check_period(indicator: &str, period: usize) -> CryptoResult<()> {
    if period == 0 || period > MAX_PERIOD {
        return Err(CryptoError::InvalidArgument(format!(
            "{} period must be between 1 and {}",
            indicator, MAX_PERIOD
        )));
    }

    Ok(())
}

fn coin_not_found(coin: &str, err: CryptoError) -> CryptoError {
    match err {
        CryptoError::NotFound(_) => {
            CryptoError::NotFound(format!("Coin with symbol or ID '{}' not found.", coin))
        }
        other => other,
    }
}
