//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `GEORESOLVE_*` environment
//! variables. The GeoNames username has no usable default and must be set
//! either through the environment or by the caller before [`Config::validate`].

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GEORESOLVE_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// GeoNames account username sent with every query. No default.
    pub username: String,

    /// Gazetteer endpoint base URL. Default: `http://api.geonames.org`.
    pub base_url: String,

    /// Language tag for context-aware queries. Default: `nl`.
    pub search_language: String,

    /// Country code used as bias when an article yields no country context.
    /// Default: `NL`.
    pub default_country: String,

    /// Per-call timeout for gazetteer requests. Default: 10 seconds.
    pub request_timeout: Duration,

    /// Max number of articles processed concurrently. Default: `4`.
    pub max_concurrency: usize,
}

/// Default gazetteer endpoint used when `GEORESOLVE_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://api.geonames.org";

impl Default for Config {
    fn default() -> Self {
        Self {
            username: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            search_language: "nl".to_string(),
            default_country: "NL".to_string(),
            request_timeout: Duration::from_secs(10),
            max_concurrency: 4,
        }
    }
}

impl Config {
    const ENV_USERNAME: &'static str = "GEORESOLVE_USERNAME";
    const ENV_BASE_URL: &'static str = "GEORESOLVE_BASE_URL";
    const ENV_SEARCH_LANGUAGE: &'static str = "GEORESOLVE_SEARCH_LANGUAGE";
    const ENV_DEFAULT_COUNTRY: &'static str = "GEORESOLVE_DEFAULT_COUNTRY";
    const ENV_TIMEOUT_SECS: &'static str = "GEORESOLVE_TIMEOUT_SECS";
    const ENV_MAX_CONCURRENCY: &'static str = "GEORESOLVE_MAX_CONCURRENCY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let username = Self::parse_string_from_env(Self::ENV_USERNAME, defaults.username);
        let base_url = Self::parse_string_from_env(Self::ENV_BASE_URL, defaults.base_url);
        let search_language =
            Self::parse_string_from_env(Self::ENV_SEARCH_LANGUAGE, defaults.search_language);
        let default_country =
            Self::parse_string_from_env(Self::ENV_DEFAULT_COUNTRY, defaults.default_country);
        let request_timeout = Self::parse_timeout_from_env(defaults.request_timeout)?;
        let max_concurrency =
            Self::parse_usize_from_env(Self::ENV_MAX_CONCURRENCY, defaults.max_concurrency);

        Ok(Self {
            username,
            base_url,
            search_language,
            default_country,
            request_timeout,
            max_concurrency,
        })
    }

    /// Validates basic invariants before a run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::MissingUsername);
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }

        if self.default_country.trim().is_empty() {
            return Err(ConfigError::MissingDefaultCountry);
        }

        if self.max_concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }

        Ok(())
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_TIMEOUT_SECS) {
            Ok(value) => {
                let secs: u64 = value.parse().map_err(|e| ConfigError::TimeoutParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(default)
    }
}
