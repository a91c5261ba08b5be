pub mod app_config;
pub mod memory;
pub mod redis_repo;
pub mod repository;
pub mod writer;

pub use memory::InMemoryStore;
pub use redis_repo::RedisClient;
pub use repository::{KeyValueStore, StoreError};
pub use writer::OfferWriter;
