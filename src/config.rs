//! Centralized configuration management for upskill

use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};
use reqwest::Url;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the UpSkill API; `/api/...` paths are joined onto it
    pub api_base_url: String,
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Event loop poll interval (milliseconds)
    pub tick_rate_ms: u64,
    /// File the tracing appender writes to
    pub log_file: PathBuf,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds, `None` waits indefinitely
    pub timeout_seconds: Option<u64>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: "upskill/0.1.0".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            http: HttpConfig::default(),
            tick_rate_ms: 100,
            log_file: PathBuf::from("upskill.log"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_base_url = lookup("UPSKILL_API_BASE_URL").unwrap_or(defaults.api_base_url);

        let http = HttpConfig {
            timeout_seconds: parse_var(&lookup, "UPSKILL_HTTP_TIMEOUT_SECONDS")?,
            user_agent: lookup("UPSKILL_USER_AGENT").unwrap_or(defaults.http.user_agent),
        };

        let tick_rate_ms = parse_var(&lookup, "UPSKILL_TICK_RATE_MS")?.unwrap_or(defaults.tick_rate_ms);

        let log_file = lookup("UPSKILL_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        Ok(Config {
            api_base_url,
            http,
            tick_rate_ms,
            log_file,
        })
    }

    /// Replace the API base URL, e.g. from a command line flag
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.to_string();
        self
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }

    /// Get event loop tick rate as Duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api_base_url))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "API base URL must use http or https: {}",
                self.api_base_url
            ));
        }

        if self.tick_rate_ms == 0 {
            return Err(anyhow::anyhow!("Tick rate must be greater than zero"));
        }

        Ok(())
    }
}

/// Helper function to parse a variable as a specific type
fn parse_var<T, F>(lookup: &F, var_name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match lookup(var_name) {
        Some(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.http.timeout_seconds, None);
        assert_eq!(config.http.user_agent, "upskill/0.1.0");
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_file, PathBuf::from("upskill.log"));
        assert!(config.http_timeout().is_none());
    }

    #[test]
    fn test_config_overrides() {
        let config = config_from(&[
            ("UPSKILL_API_BASE_URL", "https://api.example.com"),
            ("UPSKILL_HTTP_TIMEOUT_SECONDS", "5"),
            ("UPSKILL_TICK_RATE_MS", "250"),
            ("UPSKILL_LOG_FILE", "/tmp/upskill-test.log"),
        ])
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.http_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.log_file, PathBuf::from("/tmp/upskill-test.log"));
    }

    #[test]
    fn test_config_rejects_malformed_numbers() {
        let err = config_from(&[("UPSKILL_TICK_RATE_MS", "fast")]).unwrap_err();
        assert!(err.to_string().contains("UPSKILL_TICK_RATE_MS"));
    }

    #[test]
    fn test_config_validation() {
        config_from(&[]).unwrap().validate().unwrap();

        let bad_scheme = Config::default().with_base_url("ftp://example.com");
        assert!(bad_scheme.validate().is_err());

        let not_a_url = Config::default().with_base_url("localhost");
        assert!(not_a_url.validate().is_err());

        let zero_tick = Config { tick_rate_ms: 0, ..Config::default() };
        assert!(zero_tick.validate().is_err());
    }
}
