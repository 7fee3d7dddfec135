//! Technical indicators computed from daily closing prices.

pub mod indicators;
pub mod types;

pub use indicators::{calculate_rsi, calculate_sma, rsi_signal, sma_signal};
pub use types::{Indicator, IndicatorResult, Signal};
