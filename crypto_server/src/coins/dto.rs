use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_TOP_LIMIT: usize = 10;
pub const MAX_TOP_LIMIT: usize = 100;
pub const DEFAULT_TICKERS_LIMIT: usize = 100;
pub const MAX_TICKERS_LIMIT: usize = 1000;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Number of coins to return
    pub limit: Option<usize>,
}

impl LimitQuery {
    /// Applies the default and rejects values outside `1..=max`.
    pub fn resolve(&self, default: usize, max: usize) -> Result<usize, String> {
        let limit = self.limit.unwrap_or(default);

        if limit == 0 || limit > max {
            return Err(format!("limit must be between 1 and {}", max));
        }

        Ok(limit)
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Coin name or symbol to look for
    pub query: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChangesQuery {
    /// Comma separated periods, e.g. `1h,24h,7d`
    pub periods: Option<String>,
}

impl ChangesQuery {
    pub fn periods(&self) -> Vec<String> {
        self.periods
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|period| !period.is_empty())
            .map(str::to_string)
            .collect()
    }
}
