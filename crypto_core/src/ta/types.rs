use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_SMA_PERIOD: usize = 20;
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Longest indicator window, in days, the provider is asked to serve.
pub const MAX_PERIOD: usize = 5000;

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Indicator {
    Sma,
    Rsi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IndicatorResult {
    pub coin_name: String,
    pub coin_symbol: String,
    pub indicator: Indicator,
    pub period: usize,
    pub value: f64,
    pub current_price: Option<f64>,
    pub signal: Signal,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indicator::Sma => write!(f, "SMA"),
            Indicator::Rsi => write!(f, "RSI"),
        }
    }
}
