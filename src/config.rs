use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{DEFAULT_SEARCH_QUERY, DEFAULT_TWITTER_API_BASE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Upstream API
    /// Bearer token for the search API. Absence is reported per request, not at startup.
    pub twitter_bearer_token: Option<String>,
    pub twitter_api_base: String,
    pub search_query: String,
    pub http_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Dashboard
    /// Remote aggregator endpoint. When unset the dashboard uses the in-process aggregator.
    pub mentions_url: Option<String>,
    pub refresh_interval_secs: u32,
    pub slide_interval_secs: u32,
    pub clock_interval: Duration,
    pub schedule_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Upstream API
            twitter_bearer_token: optional_env("TWITTER_BEARER_TOKEN"),
            twitter_api_base: env_or_default("TWITTER_API_BASE", DEFAULT_TWITTER_API_BASE),
            search_query: env_or_default("SEARCH_QUERY", DEFAULT_SEARCH_QUERY),
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 30)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("PORT", 3001)?,

            // Dashboard
            mentions_url: optional_env("MENTIONS_URL"),
            refresh_interval_secs: parse_env_u32("REFRESH_INTERVAL_SECS", 60)?,
            slide_interval_secs: parse_env_u32("SLIDE_INTERVAL_SECS", 10)?,
            clock_interval: Duration::from_secs(parse_env_u64("CLOCK_INTERVAL_SECS", 60)?),
            schedule_path: optional_env("SCHEDULE_PATH").map(PathBuf::from),
        })
    }

    /// Configuration with defaults and a dummy token, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            twitter_bearer_token: Some("test-token".to_string()),
            twitter_api_base: "http://127.0.0.1:9".to_string(),
            search_query: DEFAULT_SEARCH_QUERY.to_string(),
            http_timeout: Duration::from_secs(5),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            mentions_url: None,
            refresh_interval_secs: 60,
            slide_interval_secs: 10,
            clock_interval: Duration::from_secs(60),
            schedule_path: None,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_query.trim().is_empty() {
            return Err(invalid("SEARCH_QUERY", "cannot be empty"));
        }
        if self.refresh_interval_secs == 0 {
            return Err(invalid("REFRESH_INTERVAL_SECS", "must be at least 1"));
        }
        if self.slide_interval_secs == 0 {
            return Err(invalid("SLIDE_INTERVAL_SECS", "must be at least 1"));
        }
        if self.clock_interval.is_zero() {
            return Err(invalid("CLOCK_INTERVAL_SECS", "must be at least 1"));
        }
        if let Err(e) = url::Url::parse(&self.twitter_api_base) {
            return Err(invalid("TWITTER_API_BASE", &format!("not a valid URL: {e}")));
        }
        if let Some(ref mentions_url) = self.mentions_url {
            if let Err(e) = url::Url::parse(mentions_url) {
                return Err(invalid("MENTIONS_URL", &format!("not a valid URL: {e}")));
            }
        }
        Ok(())
    }
}

fn invalid(name: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        message: message.to_string(),
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TWITTER_BEARER_TOKEN",
        "TWITTER_API_BASE",
        "SEARCH_QUERY",
        "HTTP_TIMEOUT_SECS",
        "WEB_HOST",
        "PORT",
        "MENTIONS_URL",
        "REFRESH_INTERVAL_SECS",
        "SLIDE_INTERVAL_SECS",
        "CLOCK_INTERVAL_SECS",
        "SCHEDULE_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_token() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert!(config.twitter_bearer_token.is_none());
        assert_eq!(config.web_port, 3001);
        assert_eq!(config.search_query, DEFAULT_SEARCH_QUERY);
        assert_eq!(config.refresh_interval_secs, 60);
        assert_eq!(config.slide_interval_secs, 10);
        assert_eq!(config.clock_interval, Duration::from_secs(60));
        assert!(config.mentions_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_port_and_token_from_env() {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("TWITTER_BEARER_TOKEN", "abc");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.web_port, 8080);
        assert_eq!(config.twitter_bearer_token.as_deref(), Some("abc"));
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_parse_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::ParseInt { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_intervals() {
        let config = Config {
            slide_interval_secs: 0,
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());

        let config = Config {
            refresh_interval_secs: 0,
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_mentions_url() {
        let config = Config {
            mentions_url: Some("not a url".to_string()),
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());

        let config = Config {
            mentions_url: Some("https://example.com/api/tweets".to_string()),
            ..Config::for_testing()
        };
        assert!(config.validate().is_ok());
    }
}
