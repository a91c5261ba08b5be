use crate::repository::{KeyValueStore, StoreError};
use std::time::Duration;
use tracing::info;
use txgen_shared::Offer;

/// Publishes offers as JSON under `offer:<id>` with a fixed TTL.
pub struct OfferWriter<S: KeyValueStore> {
    store: S,
    ttl: Duration,
}

impl<S: KeyValueStore> OfferWriter<S> {
    pub fn new(store: S, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Write the offer and return the key it was stored under.
    pub async fn store_offer(&self, offer: &Offer) -> Result<String, StoreError> {
        let key = offer.key();
        let json = offer.to_json()?;

        self.store.put(&key, &json, self.ttl).await?;
        info!("Stored new offer with TTL {}sec: {}", self.ttl.as_secs(), key);
        Ok(key)
    }
}
