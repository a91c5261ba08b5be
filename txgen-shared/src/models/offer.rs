use crate::models::category::TransactionCategory;
use serde::{Deserialize, Serialize};

/// Every offer is priced in roubles.
pub const CURRENCY: &str = "RUB";

/// Namespace for offer keys in the store: `offer:<id>`.
pub const OFFER_KEY_PREFIX: &str = "offer:";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Amount {
    value: f64,
    currency: String,
}

impl Amount {
    /// Amount in the fixed currency, rounded to kopecks.
    pub fn rub(value: f64) -> Self {
        Self {
            value: (value * 100.0).round() / 100.0,
            currency: CURRENCY.to_string(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Where the payment would happen. Vendor and coordinates are unrelated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    vendor: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    pub fn new(vendor: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            vendor: vendor.into(),
            latitude,
            longitude,
        }
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A synthetic payment suggestion.
///
/// Fields are only readable once built. `Offer::new` derives the id as
/// `pmt-<suggestedAt>` and `from_json` rejects records that break that rule or
/// carry a currency other than RUB. Two offers created within the same second
/// share an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    id: String,
    amount: Amount,
    category: TransactionCategory,
    location: Location,
    suggested_at: i64,
}

impl Offer {
    pub fn new(
        suggested_at: i64,
        amount: Amount,
        category: TransactionCategory,
        location: Location,
    ) -> Self {
        Self {
            id: format!("pmt-{}", suggested_at),
            amount,
            category,
            location,
            suggested_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn category(&self) -> TransactionCategory {
        self.category
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Unix timestamp (seconds) the offer was generated at.
    pub fn suggested_at(&self) -> i64 {
        self.suggested_at
    }

    /// Store key for this offer.
    pub fn key(&self) -> String {
        format!("{}{}", OFFER_KEY_PREFIX, self.id)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, OfferError> {
        let offer: Offer = serde_json::from_str(json)?;

        let expected_id = format!("pmt-{}", offer.suggested_at);
        if offer.id != expected_id {
            return Err(OfferError::IdMismatch {
                id: offer.id,
                suggested_at: offer.suggested_at,
            });
        }
        if offer.amount.currency != CURRENCY {
            return Err(OfferError::UnsupportedCurrency(offer.amount.currency));
        }
        Ok(offer)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OfferError {
    #[error("Malformed offer JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Offer id {id} does not match suggestedAt {suggested_at}")]
    IdMismatch { id: String, suggested_at: i64 },

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
