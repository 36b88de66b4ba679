use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub monthly_target: u32,
    pub backlog_warning_threshold: usize,
    pub steam_fetch_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_or("PORT", 8080)?,
            monthly_target: env_or("MONTHLY_TARGET", 3)?,
            backlog_warning_threshold: env_or("BACKLOG_WARNING_THRESHOLD", 5)?,
            steam_fetch_delay: Duration::from_millis(env_or("STEAM_FETCH_DELAY_MS", 2000)?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            monthly_target: 3,
            backlog_warning_threshold: 5,
            steam_fetch_delay: Duration::from_millis(2000),
        }
    }
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.port, 8080);
        assert_eq!(config.monthly_target, 3);
        assert_eq!(config.backlog_warning_threshold, 5);
        assert_eq!(config.steam_fetch_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_unset_variable_uses_default() {
        let value: u32 = env_or("BACKLOG_TEST_SURELY_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
