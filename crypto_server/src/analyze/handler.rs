use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use crypto_core::ta::IndicatorResult;
use crypto_core::ta::types::{DEFAULT_RSI_PERIOD, DEFAULT_SMA_PERIOD};

use crate::{error::ErrorServer, extract::ApiQuery, state::ServerState};

use super::dto::PeriodQuery;

#[utoipa::path(
    get,
    path = "/analyze/sma/{coin}",
    params(
        ("coin" = String, Path, description = "Coin symbol or Coinpaprika id"),
        PeriodQuery,
    ),
    description = "Simple Moving Average with a buy/sell signal",
    responses(
        (status = 200, description = "Success", body = IndicatorResult),
        (status = 404, description = "Coin not found", body = ErrorServer),
        (status = 422, description = "Not enough price history", body = ErrorServer),
    )
)]
pub async fn sma(
    State(server_state): State<Arc<ServerState>>,
    Path(coin): Path<String>,
    ApiQuery(query): ApiQuery<PeriodQuery>,
) -> Result<Json<IndicatorResult>, ErrorServer> {
    let period = query.period.unwrap_or(DEFAULT_SMA_PERIOD);
    let result = server_state.service().sma(&coin, period).await?;

    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/analyze/rsi/{coin}",
    params(
        ("coin" = String, Path, description = "Coin symbol or Coinpaprika id"),
        PeriodQuery,
    ),
    description = "Relative Strength Index with an overbought/oversold signal",
    responses(
        (status = 200, description = "Success", body = IndicatorResult),
        (status = 404, description = "Coin not found", body = ErrorServer),
        (status = 422, description = "Not enough price history", body = ErrorServer),
    )
)]
pub async fn rsi(
    State(server_state): State<Arc<ServerState>>,
    Path(coin): Path<String>,
    ApiQuery(query): ApiQuery<PeriodQuery>,
) -> Result<Json<IndicatorResult>, ErrorServer> {
    let period = query.period.unwrap_or(DEFAULT_RSI_PERIOD);
    let result = server_state.service().rsi(&coin, period).await?;

    Ok(Json(result))
}
