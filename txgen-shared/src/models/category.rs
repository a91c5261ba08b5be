use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending categories an offer can be filed under.
///
/// Serialized by symbolic name (`SBP_TRANSFER`, `CASH_WITHDRAWAL`, ...), which is
/// what downstream consumers read from the `category` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionCategory {
    SbpTransfer,
    CashWithdrawal,
    GoodsPayment,
    Supermarkets,
    MobileServices,
    DigitalGoods,
    Transport,
    RailwayTickets,
    Medicine,
    HomeImprovement,
    SportsAndOutdoors,
    ClothingAndShoes,
    RestaurantsAndCafes,
    Subscriptions,
    Entertainment,
    Education,
    AutoAndGas,
    Utilities,
    Taxes,
    Insurance,
    Charity,
    Travel,
    Electronics,
    BeautyAndHealth,
    Pets,
    ChildrenProducts,
    Delivery,
    Other,
}

impl TransactionCategory {
    pub const ALL: [TransactionCategory; 28] = [
        Self::SbpTransfer,
        Self::CashWithdrawal,
        Self::GoodsPayment,
        Self::Supermarkets,
        Self::MobileServices,
        Self::DigitalGoods,
        Self::Transport,
        Self::RailwayTickets,
        Self::Medicine,
        Self::HomeImprovement,
        Self::SportsAndOutdoors,
        Self::ClothingAndShoes,
        Self::RestaurantsAndCafes,
        Self::Subscriptions,
        Self::Entertainment,
        Self::Education,
        Self::AutoAndGas,
        Self::Utilities,
        Self::Taxes,
        Self::Insurance,
        Self::Charity,
        Self::Travel,
        Self::Electronics,
        Self::BeautyAndHealth,
        Self::Pets,
        Self::ChildrenProducts,
        Self::Delivery,
        Self::Other,
    ];

    /// Symbolic name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SbpTransfer => "SBP_TRANSFER",
            Self::CashWithdrawal => "CASH_WITHDRAWAL",
            Self::GoodsPayment => "GOODS_PAYMENT",
            Self::Supermarkets => "SUPERMARKETS",
            Self::MobileServices => "MOBILE_SERVICES",
            Self::DigitalGoods => "DIGITAL_GOODS",
            Self::Transport => "TRANSPORT",
            Self::RailwayTickets => "RAILWAY_TICKETS",
            Self::Medicine => "MEDICINE",
            Self::HomeImprovement => "HOME_IMPROVEMENT",
            Self::SportsAndOutdoors => "SPORTS_AND_OUTDOORS",
            Self::ClothingAndShoes => "CLOTHING_AND_SHOES",
            Self::RestaurantsAndCafes => "RESTAURANTS_AND_CAFES",
            Self::Subscriptions => "SUBSCRIPTIONS",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Education => "EDUCATION",
            Self::AutoAndGas => "AUTO_AND_GAS",
            Self::Utilities => "UTILITIES",
            Self::Taxes => "TAXES",
            Self::Insurance => "INSURANCE",
            Self::Charity => "CHARITY",
            Self::Travel => "TRAVEL",
            Self::Electronics => "ELECTRONICS",
            Self::BeautyAndHealth => "BEAUTY_AND_HEALTH",
            Self::Pets => "PETS",
            Self::ChildrenProducts => "CHILDREN_PRODUCTS",
            Self::Delivery => "DELIVERY",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SbpTransfer => "Fast Payment System transfer",
            Self::CashWithdrawal => "Cash withdrawal",
            Self::GoodsPayment => "Goods and services payment",
            Self::Supermarkets => "Supermarkets",
            Self::MobileServices => "Mobile services",
            Self::DigitalGoods => "Digital goods",
            Self::Transport => "Transport",
            Self::RailwayTickets => "Railway tickets",
            Self::Medicine => "Healthcare and medicine",
            Self::HomeImprovement => "Home improvement",
            Self::SportsAndOutdoors => "Sports and outdoor equipment",
            Self::ClothingAndShoes => "Clothing and footwear",
            Self::RestaurantsAndCafes => "Restaurants and cafes",
            Self::Subscriptions => "Online subscriptions",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::AutoAndGas => "Car services and fuel",
            Self::Utilities => "Utility payments",
            Self::Taxes => "Taxes and fees",
            Self::Insurance => "Insurance",
            Self::Charity => "Charity",
            Self::Travel => "Travel and tourism",
            Self::Electronics => "Electronics and appliances",
            Self::BeautyAndHealth => "Beauty and personal care",
            Self::Pets => "Pet supplies",
            Self::ChildrenProducts => "Children's products",
            Self::Delivery => "Delivery services",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransactionCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Unknown transaction category: {0}")]
    Unknown(String),
}
