use super::types::*;
use crate::error::{CryptoError, CryptoResult};

/// Simple Moving Average of the last `period` prices.
pub fn calculate_sma(prices: &[f64], period: usize) -> CryptoResult<f64> {
    if period == 0 {
        return Err(CryptoError::InvalidArgument(
            "SMA period must be positive".to_string(),
        ));
    }

    if prices.len() < period {
        return Err(CryptoError::InsufficientData {
            needed: period,
            available: prices.len(),
        });
    }

    let window = &prices[prices.len() - period..];
    let sum: f64 = window.iter().sum();

    Ok(sum / period as f64)
}

/// RSI over the last `period` price changes, using simple averages.
pub fn calculate_rsi(prices: &[f64], period: usize) -> CryptoResult<f64> {
    if period == 0 {
        return Err(CryptoError::InvalidArgument(
            "RSI period must be positive".to_string(),
        ));
    }

    let needed = period.saturating_add(1);
    if prices.len() < needed {
        return Err(CryptoError::InsufficientData {
            needed,
            available: prices.len(),
        });
    }

    let window = &prices[prices.len() - needed..];

    let mut gains = 0.0;
    let mut losses = 0.0;

    for pair in window.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}

/// Price above the average is bullish. Equal is neither.
pub fn sma_signal(current_price: f64, sma: f64) -> Signal {
    if current_price > sma {
        Signal::Buy
    } else if current_price < sma {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

pub fn rsi_signal(rsi: f64) -> Signal {
    if rsi > RSI_OVERBOUGHT {
        Signal::Sell
    } else if rsi < RSI_OVERSOLD {
        Signal::Buy
    } else {
        Signal::Hold
    }
}
