use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{CryptoError, CryptoResult};

pub const QUOTE_CURRENCY: &str = "USD";

const PERCENT_CHANGE_PREFIX: &str = "percent_change_";

/// Coinpaprika reports unranked coins as rank 0.
fn rank_or_unranked<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let rank = Option::<u32>::deserialize(deserializer)?;
    Ok(rank.filter(|rank| *rank > 0))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of the coin list or of a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoinRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "rank_or_unranked")]
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub currencies: Vec<CoinRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "rank_or_unranked")]
    pub rank: Option<u32>,
    #[serde(default)]
    pub quotes: BTreeMap<String, QuoteResponse>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// USD ticker with percent changes keyed by period (`1h`, `24h`, `7d`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ticker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: Option<u32>,
    pub price: f64,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub quotes: BTreeMap<String, f64>,
}

impl Ticker {
    pub fn percent_change(&self, period: &str) -> Option<f64> {
        self.quotes.get(period).copied()
    }
}

impl TryFrom<TickerResponse> for Ticker {
    type Error = CryptoError;

    fn try_from(response: TickerResponse) -> CryptoResult<Self> {
        let TickerResponse {
            id,
            name,
            symbol,
            rank,
            mut quotes,
        } = response;

        let quote = quotes.remove(QUOTE_CURRENCY).ok_or_else(|| {
            CryptoError::MalformedResponse(format!("no {} quote for coin '{}'", QUOTE_CURRENCY, id))
        })?;

        let price = quote.price.ok_or_else(|| {
            CryptoError::MalformedResponse(format!("no {} price for coin '{}'", QUOTE_CURRENCY, id))
        })?;

        let changes = quote
            .extra
            .iter()
            .filter_map(|(key, value)| {
                let period = key.strip_prefix(PERCENT_CHANGE_PREFIX)?;
                Some((period.to_string(), value.as_f64()?))
            })
            .collect();

        Ok(Ticker {
            id,
            name,
            symbol,
            rank,
            price,
            market_cap: quote.market_cap,
            volume_24h: quote.volume_24h,
            quotes: changes,
        })
    }
}

/// Coin details. Fields not modelled here are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "rank_or_unranked")]
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub coin_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalTick {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}
