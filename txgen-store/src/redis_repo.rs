use crate::repository::{KeyValueStore, StoreError};
use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
}

impl RedisClient {
    /// Parses the connection string; nothing is dialled until the first command.
    pub fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl KeyValueStore for RedisClient {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        // Fresh connection per write, dropped on return.
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs()).await?;
        debug!("SET {} EX {}", key, ttl.as_secs());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_url() {
        assert!(RedisClient::new("not a redis url").is_err());
    }

    #[test]
    fn test_accepts_default_url() {
        assert!(RedisClient::new("redis://redis:6379/0").is_ok());
    }
}
