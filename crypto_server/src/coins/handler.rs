use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use crypto_core::market::{PriceChanges, PriceQuote, TopCoin};
use crypto_core::paprika::{CoinDetail, CoinRecord, Ticker};

use crate::{error::ErrorServer, extract::ApiQuery, state::ServerState};

use super::dto::{
    ChangesQuery, DEFAULT_TICKERS_LIMIT, DEFAULT_TOP_LIMIT, LimitQuery, MAX_TICKERS_LIMIT,
    MAX_TOP_LIMIT, SearchQuery,
};

#[utoipa::path(
    get,
    path = "/price/{coin}",
    params(("coin" = String, Path, description = "Coin symbol or Coinpaprika id")),
    description = "Current USD price of a coin",
    responses(
        (status = 200, description = "Success", body = PriceQuote),
        (status = 404, description = "Coin not found", body = ErrorServer),
    )
)]
pub async fn price(
    State(server_state): State<Arc<ServerState>>,
    Path(coin): Path<String>,
) -> Result<Json<PriceQuote>, ErrorServer> {
    let quote = server_state.service().price(&coin).await?;

    Ok(Json(quote))
}

#[utoipa::path(
    get,
    path = "/top",
    params(LimitQuery),
    description = "Top coins by market cap rank",
    responses(
        (status = 200, description = "Success", body = Vec<TopCoin>),
        (status = 400, description = "Limit out of range", body = ErrorServer),
    )
)]
pub async fn top_coins(
    State(server_state): State<Arc<ServerState>>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<Json<Vec<TopCoin>>, ErrorServer> {
    let limit = query
        .resolve(DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT)
        .map_err(ErrorServer::bad_request)?;

    let coins = server_state.service().top_coins(limit).await?;

    Ok(Json(coins))
}

#[utoipa::path(
    get,
    path = "/tickers",
    params(LimitQuery),
    description = "USD tickers ordered by rank",
    responses(
        (status = 200, description = "Success", body = Vec<Ticker>),
        (status = 400, description = "Limit out of range", body = ErrorServer),
    )
)]
pub async fn tickers(
    State(server_state): State<Arc<ServerState>>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<Json<Vec<Ticker>>, ErrorServer> {
    let limit = query
        .resolve(DEFAULT_TICKERS_LIMIT, MAX_TICKERS_LIMIT)
        .map_err(ErrorServer::bad_request)?;

    let tickers = server_state.service().tickers(limit).await?;

    Ok(Json(tickers))
}

#[utoipa::path(
    get,
    path = "/tickers/{coin}",
    params(("coin" = String, Path, description = "Coin symbol or Coinpaprika id")),
    description = "USD ticker of a single coin",
    responses(
        (status = 200, description = "Success", body = Ticker),
        (status = 404, description = "Coin not found", body = ErrorServer),
    )
)]
pub async fn ticker(
    State(server_state): State<Arc<ServerState>>,
    Path(coin): Path<String>,
) -> Result<Json<Ticker>, ErrorServer> {
    let ticker = server_state.service().ticker(&coin).await?;

    Ok(Json(ticker))
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    description = "Search coins by name or symbol",
    responses(
        (status = 200, description = "Success", body = Vec<CoinRecord>),
        (status = 400, description = "Empty query", body = ErrorServer),
    )
)]
pub async fn search(
    State(server_state): State<Arc<ServerState>>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<CoinRecord>>, ErrorServer> {
    let results = server_state.service().search(&query.query).await?;

    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/details/{coin_id}",
    params(("coin_id" = String, Path, description = "Coin symbol or Coinpaprika id")),
    description = "Provider details of a coin",
    responses(
        (status = 200, description = "Success"),
        (status = 404, description = "Coin not found", body = ErrorServer),
    )
)]
pub async fn details(
    State(server_state): State<Arc<ServerState>>,
    Path(coin_id): Path<String>,
) -> Result<Json<CoinDetail>, ErrorServer> {
    let detail = server_state.service().details(&coin_id).await?;

    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/changes/{coin}",
    params(
        ("coin" = String, Path, description = "Coin symbol or Coinpaprika id"),
        ChangesQuery,
    ),
    description = "Percent price changes over the requested periods",
    responses(
        (status = 200, description = "Success", body = PriceChanges),
        (status = 404, description = "Coin not found", body = ErrorServer),
    )
)]
pub async fn changes(
    State(server_state): State<Arc<ServerState>>,
    Path(coin): Path<String>,
    ApiQuery(query): ApiQuery<ChangesQuery>,
) -> Result<Json<PriceChanges>, ErrorServer> {
    let changes = server_state
        .service()
        .changes(&coin, &query.periods())
        .await?;

    Ok(Json(changes))
}
