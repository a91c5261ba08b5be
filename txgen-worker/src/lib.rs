pub mod feed;

pub use feed::OfferFeed;
