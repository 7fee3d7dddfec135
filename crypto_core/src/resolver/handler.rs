use std::sync::Arc;

use log::{debug, warn};

use crate::coin_map::CoinMapCache;
use crate::paprika::{CoinProvider, CoinRecord};

/// Provider ids look like `btc-bitcoin`.
const ID_SEPARATOR: char = '-';

/// Turns user input into a provider coin id. Never fails: unknown tokens come
/// back lowercased and the following fetch reports the miss.
pub struct Resolver {
    provider: Arc<dyn CoinProvider>,
    cache: CoinMapCache,
}

impl Resolver {
    pub fn new(provider: Arc<dyn CoinProvider>) -> Self {
        let cache = CoinMapCache::new(Arc::clone(&provider));

        Self { provider, cache }
    }

    pub fn cache(&self) -> &CoinMapCache {
        &self.cache
    }

    pub async fn resolve(&self, token: &str) -> String {
        let token_lower = token.to_lowercase();

        let coin_map = self.cache.get().await;
        if let Some(coin_id) = coin_map.get(&token_lower) {
            return coin_id.to_string();
        }

        if token_lower.contains(ID_SEPARATOR) {
            return token_lower;
        }

        match self.provider.search_coins(token).await {
            Ok(candidates) => {
                let coin_id = pick_candidate(&candidates, &token_lower).unwrap_or(token_lower);
                debug!("Search resolved '{}' to '{}'", token, coin_id);
                coin_id
            }
            Err(e) => {
                warn!("Search fallback failed for '{}': {}", token, e);
                token_lower
            }
        }
    }
}

/// Exact symbol match first, else the provider's top hit.
fn pick_candidate(candidates: &[CoinRecord], token_lower: &str) -> Option<String> {
    candidates
        .iter()
        .find(|candidate| candidate.symbol.to_lowercase() == token_lower)
        .or_else(|| candidates.first())
        .map(|candidate| candidate.id.clone())
        .filter(|coin_id| !coin_id.is_empty())
}
