use crate::{Item, World};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Hash, Copy, Clone, Debug, Deserialize, Serialize, Eq, PartialEq, PartialOrd, Ord)]
pub struct ListingId(pub u64);

impl Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    Buy,
    Sell,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Buy => "buy",
            ListingType::Sell => "sell",
        }
    }

    /// Trade chat shorthand, "want to buy" / "want to sell".
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ListingType::Buy => "WTB",
            ListingType::Sell => "WTS",
        }
    }
}

impl Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown listing type {0:?}, expected buy or sell")]
pub struct ParseListingTypeError(pub String);

impl FromStr for ListingType {
    type Err = ParseListingTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "wtb" => Ok(ListingType::Buy),
            "sell" | "wts" => Ok(ListingType::Sell),
            _ => Err(ParseListingTypeError(s.to_string())),
        }
    }
}

/// A player's buy or sell post. Never changes once it is in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    /// Copy of the catalog entry as it was when the post was made.
    pub item: Item,
    pub quantity: u32,
    /// Per unit.
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub world: World,
    pub ingame_name: String,
    pub timestamp: DateTime<Utc>,
}
