//! Client configuration
//!
//! Resolved once at startup from the process environment and handed to
//! [`crate::build_services`]. Nothing in the service layer reads the
//! environment afterwards.

use std::time::Duration;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 5;

/// Path serving only available products.
///
/// Two server generations disagree on this endpoint; pick the one the
/// deployed backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProdutosDisponiveisPath {
    /// `GET /produtos/ativos`
    #[default]
    Ativos,
    /// `GET /produtos/disponiveis`
    Disponiveis,
}

impl ProdutosDisponiveisPath {
    pub fn segment(&self) -> &'static str {
        match self {
            ProdutosDisponiveisPath::Ativos => "ativos",
            ProdutosDisponiveisPath::Disponiveis => "disponiveis",
        }
    }
}

impl std::str::FromStr for ProdutosDisponiveisPath {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/').to_ascii_lowercase().as_str() {
            "ativos" => Ok(ProdutosDisponiveisPath::Ativos),
            "disponiveis" => Ok(ProdutosDisponiveisPath::Disponiveis),
            other => Err(ClientError::Config(format!(
                "unknown produtos disponiveis path: {other}"
            ))),
        }
    }
}

/// Client configuration for the Cervejaria REST API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Serve every entity from in-memory mocks instead of HTTP
    pub use_mocks: bool,

    /// Request timeout
    pub timeout: Duration,

    /// Answer from mocks when the server is unreachable or failing (5xx)
    pub fallback_to_mock_on_error: bool,

    /// Which available-products endpoint the backend exposes
    pub produtos_disponiveis: ProdutosDisponiveisPath,

    /// Route a 401 redirects to
    pub login_route: String,

    /// Artificial delay applied by mock services
    pub mock_latency: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            use_mocks: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fallback_to_mock_on_error: false,
            produtos_disponiveis: ProdutosDisponiveisPath::default(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
        }
    }

    /// Configuration served entirely by mocks
    pub fn mocked() -> Self {
        Self::default().with_mocks(true)
    }

    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let flag = |key: &str| get(key).is_some_and(|v| v.trim() == "true");

        let mut config = Self::new(get("API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()));
        config.use_mocks = flag("USE_MOCKS");
        config.fallback_to_mock_on_error = flag("FALLBACK_TO_MOCK_ON_ERROR");

        if let Some(secs) = get("API_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("API_TIMEOUT_SECS: '{secs}'")))?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = get("MOCK_LATENCY_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("MOCK_LATENCY_MS: '{ms}'")))?;
            config.mock_latency = Duration::from_millis(ms);
        }
        if let Some(path) = get("PRODUTOS_DISPONIVEIS_PATH") {
            config.produtos_disponiveis = path.parse()?;
        }
        if let Some(route) = get("LOGIN_ROUTE") {
            config.login_route = route;
        }
        Ok(config)
    }

    pub fn with_mocks(mut self, use_mocks: bool) -> Self {
        self.use_mocks = use_mocks;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fallback_to_mock(mut self, enabled: bool) -> Self {
        self.fallback_to_mock_on_error = enabled;
        self
    }

    pub fn with_produtos_disponiveis(mut self, path: ProdutosDisponiveisPath) -> Self {
        self.produtos_disponiveis = path;
        self
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn with_mock_latency(mut self, latency: Duration) -> Self {
        self.mock_latency = latency;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.use_mocks);
        assert!(!config.fallback_to_mock_on_error);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.produtos_disponiveis, ProdutosDisponiveisPath::Ativos);
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.mock_latency, Duration::from_millis(5));
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("API_URL", "https://api.cervejaria.com"),
            ("USE_MOCKS", "true"),
            ("FALLBACK_TO_MOCK_ON_ERROR", "true"),
            ("API_TIMEOUT_SECS", "3"),
            ("PRODUTOS_DISPONIVEIS_PATH", "/disponiveis"),
            ("MOCK_LATENCY_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.cervejaria.com");
        assert!(config.use_mocks);
        assert!(config.fallback_to_mock_on_error);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(
            config.produtos_disponiveis,
            ProdutosDisponiveisPath::Disponiveis
        );
        assert_eq!(config.mock_latency, Duration::ZERO);
    }

    #[test]
    fn test_mocks_flag_is_literal_true() {
        let config = ApiConfig::from_lookup(lookup(&[("USE_MOCKS", "1")])).unwrap();
        assert!(!config.use_mocks);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ApiConfig::from_lookup(lookup(&[("API_TIMEOUT_SECS", "ten")])).is_err());
        assert!(
            ApiConfig::from_lookup(lookup(&[("PRODUTOS_DISPONIVEIS_PATH", "todos")])).is_err()
        );
    }
}
