pub mod clock;
pub mod generator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::{OfferGenerator, MAX_AMOUNT, MIN_AMOUNT};
