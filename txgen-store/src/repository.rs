use async_trait::async_trait;
use std::time::Duration;

/// Minimal keyed storage with expiry.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Write `value` under `key`, letting the store drop it after `ttl`.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
