use std::collections::HashMap;

use crate::paprika::CoinRecord;

/// Lowercase symbol to coin id. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinMap(HashMap<String, String>);

impl CoinMap {
    /// Active coins come first, then lower rank. Unranked coins sort last and
    /// the first id seen for a symbol wins.
    pub fn build(mut coins: Vec<CoinRecord>) -> Self {
        coins.sort_by_key(|coin| (!coin.is_active, coin.rank.map_or(u64::MAX, u64::from)));

        let mut symbols = HashMap::new();

        for coin in coins {
            let symbol = coin.symbol.to_lowercase();
            if symbol.is_empty() || coin.id.is_empty() {
                continue;
            }
            symbols.entry(symbol).or_insert(coin.id);
        }

        Self(symbols)
    }

    /// Looks up an already-lowercased symbol.
    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.0.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
