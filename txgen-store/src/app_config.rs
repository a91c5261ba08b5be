use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_REDIS_URL: &str = "redis://redis:6379/0";
pub const DEFAULT_TTL_SECONDS: u64 = 300;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub redis: RedisConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    /// Lifetime of every stored offer.
    pub ttl_seconds: u64,
    /// Pause between offers; falls back to the TTL.
    pub interval_seconds: Option<u64>,
}

impl FeedConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds.unwrap_or(self.ttl_seconds))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("feed.ttl_seconds must be greater than zero")]
    InvalidTtl,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `TXGEN_REDIS__URL=redis://localhost:6379/0`
            .add_source(
                config::Environment::with_prefix("TXGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Builder preloaded with the built-in defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(config::Config::builder()
            .set_default("redis.url", DEFAULT_REDIS_URL)?
            .set_default("feed.ttl_seconds", DEFAULT_TTL_SECONDS as i64)?)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        if config.feed.ttl_seconds == 0 {
            return Err(ConfigError::InvalidTtl);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Result<Config, ConfigError> {
        Config::from_builder(Config::defaults()?.add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_builder(Config::defaults().unwrap()).unwrap();

        assert_eq!(config.redis.url, "redis://redis:6379/0");
        assert_eq!(config.feed.ttl(), Duration::from_secs(300));
        assert_eq!(config.feed.interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_file_overrides() {
        let config = from_toml(
            r#"
            [redis]
            url = "redis://localhost:6380/2"

            [feed]
            ttl_seconds = 60
            interval_seconds = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.redis.url, "redis://localhost:6380/2");
        assert_eq!(config.feed.ttl(), Duration::from_secs(60));
        assert_eq!(config.feed.interval(), Duration::from_secs(15));
    }

    #[test]
    fn test_environment_overrides() {
        // Only test in this crate that touches the process environment.
        env::set_var("TXGEN_REDIS__URL", "redis://cache.internal:6379/1");
        env::set_var("TXGEN_FEED__TTL_SECONDS", "77");
        let loaded = Config::load();
        env::remove_var("TXGEN_REDIS__URL");
        env::remove_var("TXGEN_FEED__TTL_SECONDS");

        let config = loaded.unwrap();
        assert_eq!(config.redis.url, "redis://cache.internal:6379/1");
        assert_eq!(config.feed.ttl(), Duration::from_secs(77));
        assert_eq!(config.feed.interval(), Duration::from_secs(77));
    }

    #[test]
    fn test_interval_follows_ttl() {
        let config = from_toml("[feed]\nttl_seconds = 42\n").unwrap();
        assert_eq!(config.feed.interval(), Duration::from_secs(42));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let result = from_toml("[feed]\nttl_seconds = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidTtl)));
    }
}
