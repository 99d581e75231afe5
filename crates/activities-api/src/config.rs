use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Base URL the three endpoint paths are appended to. Empty in
    /// deployments where the API is same-origin behind the serving host,
    /// explicit (scheme + authority) everywhere else.
    #[serde(default)]
    pub api_base_url: String,
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Reads `ACTIVITIES_API_BASE_URL`, falling back to the same-origin
    /// default (empty) when unset.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("ACTIVITIES_API_BASE_URL").unwrap_or_default(),
        }
    }
}
