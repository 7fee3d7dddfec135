use clap::{Args, Parser, Subcommand};
use crypto_core::ta::types::{DEFAULT_RSI_PERIOD, DEFAULT_SMA_PERIOD};

pub const DEFAULT_TOP_LIMIT: u16 = 10;

#[derive(Parser)]
#[command(author, version, about = "Cryptocurrency prices and indicators from Coinpaprika")]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Current USD price of a coin
    Price {
        /// Coin symbol or Coinpaprika id, e.g. `btc` or `btc-bitcoin`
        coin: String,
    },

    /// Percent price changes over one or more periods
    Changes {
        coin: String,

        /// Periods such as `1h 24h 7d`; all reported periods when omitted
        periods: Vec<String>,
    },

    /// Technical indicators over daily prices
    Analyze {
        #[command(subcommand)]
        indicator: AnalyzeCommand,
    },

    /// Top coins by market cap rank
    Top {
        #[arg(short, long, default_value_t = DEFAULT_TOP_LIMIT,
              value_parser = clap::value_parser!(u16).range(1..=100))]
        limit: u16,
    },

    /// Search coins by name or symbol
    Search { query: String },

    /// Provider details of a coin
    Details { coin: String },
}

#[derive(Subcommand)]
pub enum AnalyzeCommand {
    /// Simple Moving Average
    Sma(SmaArgs),

    /// Relative Strength Index
    Rsi(RsiArgs),
}

#[derive(Args)]
pub struct SmaArgs {
    pub coin: String,

    /// Window length in days
    #[arg(short, long, default_value_t = DEFAULT_SMA_PERIOD)]
    pub period: usize,
}

#[derive(Args)]
pub struct RsiArgs {
    pub coin: String,

    /// Window length in days
    #[arg(short, long, default_value_t = DEFAULT_RSI_PERIOD)]
    pub period: usize,
}
