pub mod models;

pub use models::category::{CategoryError, TransactionCategory};
pub use models::offer::{Amount, Location, Offer, OfferError, CURRENCY, OFFER_KEY_PREFIX};
