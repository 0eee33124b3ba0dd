// src/config.rs
use tracing::info;

/// Environment variable overriding the analysis service base URL.
pub const API_URL_ENV: &str = "CAREERUP_API_URL";

/// Loopback default used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Where the analysis service lives. Injected into the client explicitly so
/// tests can point at a fake endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub base_url: String,
}

impl AnalysisConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base URL from the environment, falling back to the local
    /// development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        info!("Analysis service base URL: {}", base_url);
        Self { base_url }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local_loopback() {
        assert_eq!(AnalysisConfig::default().base_url, "http://localhost:5000");
    }

    #[test]
    fn explicit_base_url_is_kept_verbatim() {
        let config = AnalysisConfig::new("https://careerup-api.example.com");
        assert_eq!(config.base_url, "https://careerup-api.example.com");
    }

    #[test]
    fn from_env_honors_override_and_falls_back() {
        std::env::set_var(API_URL_ENV, "http://127.0.0.1:9999");
        assert_eq!(AnalysisConfig::from_env().base_url, "http://127.0.0.1:9999");

        std::env::remove_var(API_URL_ENV);
        assert_eq!(AnalysisConfig::from_env().base_url, DEFAULT_BASE_URL);
    }
}
