use std::env;

pub const DEFAULT_API_URL: &str = "https://api.coinpaprika.com/v1";

/// Upstream provider settings, read from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    base_url: String,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { base_url }
    }

    /// Reads `COINPAPRIKA_API_URL`, falling back to the public endpoint.
    pub fn from_env() -> Self {
        let base_url =
            env::var("COINPAPRIKA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ProviderConfig::new("http://localhost:1234/v1/");
        assert_eq!(config.base_url(), "http://localhost:1234/v1");
    }

    #[test]
    fn test_default_points_at_public_api() {
        assert_eq!(ProviderConfig::default().base_url(), DEFAULT_API_URL);
    }
}
