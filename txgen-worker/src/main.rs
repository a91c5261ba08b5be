use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use txgen_offer::{OfferGenerator, SystemClock};
use txgen_store::app_config::Config;
use txgen_store::{OfferWriter, RedisClient};
use txgen_worker::OfferFeed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "txgen_worker=info,txgen_store=info,txgen_offer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Publishing offers to Redis with TTL {}s", config.feed.ttl_seconds);

    let redis = RedisClient::new(&config.redis.url).context("Invalid Redis URL")?;
    let writer = OfferWriter::new(redis, config.feed.ttl());
    let feed = OfferFeed::new(OfferGenerator::new(SystemClock), writer, config.feed.interval());

    feed.run().await.context("Offer feed stopped")?;
    Ok(())
}
