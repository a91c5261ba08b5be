use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use txgen_offer::{Clock, OfferGenerator};
use txgen_store::{KeyValueStore, OfferWriter, StoreError};

/// Generate → store → sleep, forever.
pub struct OfferFeed<C: Clock, S: KeyValueStore> {
    generator: OfferGenerator<C>,
    writer: OfferWriter<S>,
    interval: Duration,
}

impl<C: Clock, S: KeyValueStore> OfferFeed<C, S> {
    pub fn new(generator: OfferGenerator<C>, writer: OfferWriter<S>, interval: Duration) -> Self {
        Self {
            generator,
            writer,
            interval,
        }
    }

    /// Produce and store a single offer, returning its key.
    pub async fn tick(&self) -> Result<String, StoreError> {
        let offer = self.generator.generate();
        self.writer.store_offer(&offer).await
    }

    /// Runs until a store write fails; that error is returned.
    pub async fn run(&self) -> Result<(), StoreError> {
        info!(
            "Offer feed started: one offer every {}s, TTL {}s",
            self.interval.as_secs(),
            self.writer.ttl().as_secs()
        );
        loop {
            self.tick().await?;
            sleep(self.interval).await;
        }
    }
}
