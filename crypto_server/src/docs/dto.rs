use crate::{analyze, coins, error::ErrorServer, info};
use crypto_core::market::{PeriodChange, PriceChanges, PriceQuote, TopCoin};
use crypto_core::paprika::{CoinRecord, Ticker};
use crypto_core::ta::{Indicator, IndicatorResult, Signal};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        info::handler::info,
        coins::handler::price,
        coins::handler::top_coins,
        coins::handler::tickers,
        coins::handler::ticker,
        coins::handler::search,
        coins::handler::details,
        coins::handler::changes,
        analyze::handler::sma,
        analyze::handler::rsi,
    ),
    components(schemas(
        info::dto::Info,
        ErrorServer,
        PriceQuote,
        TopCoin,
        Ticker,
        CoinRecord,
        PriceChanges,
        PeriodChange,
        IndicatorResult,
        Indicator,
        Signal
    ))
)]
pub struct ApiDoc;
