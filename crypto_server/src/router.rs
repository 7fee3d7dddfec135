use std::sync::Arc;

use axum::{Router, routing::get};
use crypto_core::CryptoService;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    analyze::handler::{rsi, sma},
    coins::handler::{changes, details, price, search, ticker, tickers, top_coins},
    docs::{dto::ApiDoc, handler::api_docs},
    info::handler::info,
    state::ServerState,
};

pub fn router(service: CryptoService) -> Router {
    let state = Arc::new(ServerState::from(service));

    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/", get(info))
        .route("/docs", get(api_docs))
        .route("/price/{coin}", get(price))
        .route("/top", get(top_coins))
        .route("/tickers", get(tickers))
        .route("/tickers/{coin}", get(ticker))
        .route("/search", get(search))
        .route("/details/{coin_id}", get(details))
        .route("/changes/{coin}", get(changes))
        .route("/analyze/sma/{coin}", get(sma))
        .route("/analyze/rsi/{coin}", get(rsi))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use crypto_core::paprika::{CoinDetail, CoinProvider, CoinRecord, Ticker};
    use crypto_core::{CryptoError, CryptoResult};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    struct StubProvider;

    fn bitcoin() -> Ticker {
        Ticker {
            id: "btc-bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            rank: Some(1),
            price: 60000.0,
            market_cap: Some(1.2e12),
            volume_24h: Some(3.0e10),
            quotes: BTreeMap::from([("24h".to_string(), 1.5), ("7d".to_string(), -3.0)]),
        }
    }

    #[async_trait]
    impl CoinProvider for StubProvider {
        async fn fetch_tickers(&self) -> CryptoResult<Vec<Ticker>> {
            Ok(vec![bitcoin()])
        }

        async fn fetch_ticker(&self, coin_id: &str) -> CryptoResult<Ticker> {
            if coin_id == "btc-bitcoin" {
                Ok(bitcoin())
            } else {
                Err(CryptoError::NotFound(format!("/tickers/{} not found", coin_id)))
            }
        }

        async fn fetch_coin_list(&self) -> CryptoResult<Vec<CoinRecord>> {
            Ok(vec![CoinRecord {
                id: "btc-bitcoin".to_string(),
                name: "Bitcoin".to_string(),
                symbol: "BTC".to_string(),
                rank: Some(1),
                is_active: true,
            }])
        }

        async fn search_coins(&self, _query: &str) -> CryptoResult<Vec<CoinRecord>> {
            Ok(vec![])
        }

        async fn fetch_coin_details(&self, coin_id: &str) -> CryptoResult<CoinDetail> {
            Err(CryptoError::NotFound(format!("/coins/{} not found", coin_id)))
        }

        async fn fetch_price_history(
            &self,
            _coin_id: &str,
            _window: usize,
        ) -> CryptoResult<Vec<f64>> {
            Ok(vec![58000.0, 59000.0, 61000.0])
        }
    }

    fn app() -> Router {
        router(CryptoService::new(Arc::new(StubProvider)))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    #[tokio::test]
    async fn test_price_route() {
        let (status, body) = get_json("/price/BTC").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Bitcoin");
        assert_eq!(body["price"], 60000.0);
    }

    #[tokio::test]
    async fn test_unknown_coin_is_404() {
        let (status, body) = get_json("/price/nosuchcoin").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(
            body["message"],
            "Coin with symbol or ID 'nosuchcoin' not found."
        );
    }

    #[tokio::test]
    async fn test_details_not_found_is_404() {
        let (status, _) = get_json("/details/btc").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_top_limit_out_of_range() {
        let (status, body) = get_json("/top?limit=0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "limit must be between 1 and 100");

        let (status, _) = get_json("/tickers?limit=1001").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_error() {
        for uri in [
            "/top?limit=abc",
            "/tickers?limit=-5",
            "/search",
            "/analyze/sma/btc?period=-1",
            "/analyze/rsi/btc?period=x",
        ] {
            let (status, body) = get_json(uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["status"], 400, "{}", uri);
            assert!(body["message"].is_string(), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_oversized_period_is_400() {
        let (status, body) = get_json("/analyze/sma/btc?period=200000000").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid argument: SMA period must be between 1 and 5000");
    }

    #[tokio::test]
    async fn test_top_route() {
        let (status, body) = get_json("/top?limit=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["symbol"], "BTC");
        assert_eq!(body[0]["percent_change_24h"], 1.5);
    }

    #[tokio::test]
    async fn test_ticker_route_exposes_quotes() {
        let (status, body) = get_json("/tickers/btc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["quotes"]["7d"], -3.0);
    }

    #[tokio::test]
    async fn test_search_requires_non_empty_query() {
        let (status, _) = get_json("/search?query=").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_changes_route() {
        let (status, body) = get_json("/changes/btc?periods=24h,1y").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changes"][0]["percent"], 1.5);
        assert_eq!(body["changes"][1]["percent"], Value::Null);
    }

    #[tokio::test]
    async fn test_sma_route() {
        let (status, body) = get_json("/analyze/sma/btc?period=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["indicator"], "SMA");
        let value = body["value"].as_f64().unwrap();
        assert!((value - 178000.0 / 3.0).abs() < 1e-9);
        assert_eq!(body["signal"], "BUY");
    }

    #[tokio::test]
    async fn test_rsi_with_short_history_is_422() {
        let (status, body) = get_json("/analyze/rsi/btc").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["message"],
            "Insufficient data: need at least 15 price points, got 3"
        );
    }

    #[tokio::test]
    async fn test_docs_route() {
        let (status, body) = get_json("/docs").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/price/{coin}"].is_object());
    }
}
