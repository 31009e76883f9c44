use std::env;

pub const DEFAULT_PORT: u16 = 8080;

/// Outbound per-request timeout. Keeps one slow upstream symbol from
/// stalling a whole combined request.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingKey(&'static str),

    #[error("PORT must be a valid number, got '{0}'")]
    InvalidPort(String),
}

/// Application configuration, built once at startup and passed into the
/// handlers. Credentials never live in module-level state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Alpha Vantage API key (quote provider)
    pub alpha_vantage_api_key: String,
    /// NewsAPI.org API key (news provider)
    pub news_api_key: String,
    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment. Fails if either provider
    /// key is absent or blank, so the process refuses to start misconfigured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let alpha_vantage_api_key = require_env("ALPHA_VANTAGE_API_KEY")?;
        let news_api_key = require_env("NEWS_API_KEY")?;
        let port = parse_port(env::var("PORT").ok())?;

        Ok(Self {
            alpha_vantage_api_key,
            news_api_key,
            port,
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingKey(name)),
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw)),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_default() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_parse_port_explicit() {
        assert_eq!(parse_port(Some("3000".to_string())).unwrap(), 3000);
    }

    #[test]
    fn test_parse_port_invalid() {
        let result = parse_port(Some("not-a-port".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    fn test_missing_key_message() {
        let error = ConfigError::MissingKey("ALPHA_VANTAGE_API_KEY");
        assert_eq!(
            format!("{error}"),
            "ALPHA_VANTAGE_API_KEY environment variable not set"
        );
    }
}
