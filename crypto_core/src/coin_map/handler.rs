use std::sync::Arc;

use log::{info, warn};
use tokio::sync::Mutex;

use crate::paprika::CoinProvider;

use super::dto::CoinMap;

/// Lazily built coin map. The lock is held across the fetch, so concurrent
/// first callers share a single request.
pub struct CoinMapCache {
    provider: Arc<dyn CoinProvider>,
    slot: Mutex<Option<Arc<CoinMap>>>,
}

impl CoinMapCache {
    pub fn new(provider: Arc<dyn CoinProvider>) -> Self {
        Self {
            provider,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached map, building it on first use. A failed build
    /// caches an empty map.
    pub async fn get(&self) -> Arc<CoinMap> {
        let mut slot = self.slot.lock().await;

        if let Some(map) = slot.as_ref() {
            return Arc::clone(map);
        }

        let map = Arc::new(self.build().await);
        *slot = Some(Arc::clone(&map));
        map
    }

    pub async fn reset(&self) {
        *self.slot.lock().await = None;
    }

    /// Rebuilds the map from a fresh coin list.
    pub async fn refresh(&self) -> Arc<CoinMap> {
        let mut slot = self.slot.lock().await;

        let map = Arc::new(self.build().await);
        *slot = Some(Arc::clone(&map));
        map
    }

    #[cfg(test)]
    pub(crate) async fn is_loaded(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    async fn build(&self) -> CoinMap {
        match self.provider.fetch_coin_list().await {
            Ok(coins) => {
                let total = coins.len();
                let map = CoinMap::build(coins);
                info!("Built coin map with {} symbols from {} coins", map.len(), total);
                map
            }
            Err(e) => {
                warn!(
                    "⚠️ Could not build coin map, resolution falls back to pass-through: {}",
                    e
                );
                CoinMap::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{coin, FakeProvider};

    fn cache_with(provider: FakeProvider) -> (CoinMapCache, Arc<FakeProvider>) {
        let provider = Arc::new(provider);
        (CoinMapCache::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn test_fetches_once() {
        let (cache, provider) = cache_with(FakeProvider::with_coins(vec![coin(
            "btc-bitcoin",
            "BTC",
            Some(1),
            true,
        )]));

        assert!(!cache.is_loaded().await);
        let first = cache.get().await;
        let second = cache.get().await;

        assert_eq!(first.get("btc"), Some("btc-bitcoin"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.coin_list_calls(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_share_one_fetch() {
        let (cache, provider) = cache_with(FakeProvider::with_coins(vec![coin(
            "eth-ethereum",
            "ETH",
            Some(2),
            true,
        )]));

        let (a, b, c) = tokio::join!(cache.get(), cache.get(), cache.get());

        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&b, &c));
        assert_eq!(provider.coin_list_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_caches_empty_map() {
        let (cache, provider) = cache_with(FakeProvider::default());

        assert!(cache.get().await.is_empty());
        assert!(cache.get().await.is_empty());
        assert_eq!(provider.coin_list_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_gives_empty_map() {
        let (cache, _) = cache_with(FakeProvider::with_coins(vec![]));

        assert!(cache.get().await.is_empty());
    }

    #[tokio::test]
    async fn test_reset_and_refresh_refetch() {
        let (cache, provider) = cache_with(FakeProvider::with_coins(vec![coin(
            "btc-bitcoin",
            "BTC",
            Some(1),
            true,
        )]));

        cache.get().await;
        cache.reset().await;
        assert!(!cache.is_loaded().await);

        cache.get().await;
        assert_eq!(provider.coin_list_calls(), 2);

        let refreshed = cache.refresh().await;
        assert_eq!(refreshed.get("btc"), Some("btc-bitcoin"));
        assert_eq!(provider.coin_list_calls(), 3);
    }
}
