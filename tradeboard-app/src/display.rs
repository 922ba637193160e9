//! Text shown for items and listings, independent of how the host draws it.

use chrono::Local;
use std::fmt::Display;
use thousands::Separable;
use tradeboard_api_types::{Item, Listing};

pub fn coins(amount: u64) -> String {
    format!("{} coins", amount.separate_with_commas())
}

pub fn price_label(value: Option<u64>, none_label: &str) -> String {
    value.map(coins).unwrap_or_else(|| none_label.to_string())
}

/// The expanded view of a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDetails {
    pub name: String,
    pub location: String,
    pub shop_price: String,
    pub street_price: String,
    pub high_alchemy: String,
    pub low_alchemy: String,
    pub badges: Vec<&'static str>,
}

impl From<&Item> for ItemDetails {
    fn from(item: &Item) -> Self {
        let mut badges = Vec::new();
        if item.shop {
            badges.push("Shop Item");
        }
        if item.members {
            badges.push("Members Item");
        }
        Self {
            name: item.name.clone(),
            location: item.location.clone(),
            shop_price: price_label(item.shop_price, "Not sold in shops"),
            street_price: price_label(item.street_price, "No street value"),
            high_alchemy: price_label(item.high_alchemy, "No alch value"),
            low_alchemy: price_label(item.low_alchemy, "No alch value"),
            badges,
        }
    }
}

impl Display for ItemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Location:     {}", self.location)?;
        writeln!(f, "  Shop Price:   {}", self.shop_price)?;
        writeln!(f, "  Street Price: {}", self.street_price)?;
        writeln!(f, "  High Alchemy: {}", self.high_alchemy)?;
        write!(f, "  Low Alchemy:  {}", self.low_alchemy)?;
        if !self.badges.is_empty() {
            write!(f, "\n  [{}]", self.badges.join("] ["))?;
        }
        Ok(())
    }
}

/// One entry of the recent posts panel.
pub struct ListingCard<'a>(pub &'a Listing);

impl ListingCard<'_> {
    pub fn headline(&self) -> String {
        format!("{} {}", self.0.listing_type.abbreviation(), self.0.item.name)
    }

    pub fn terms(&self) -> String {
        format!(
            "Qty: {} @ {}ea",
            self.0.quantity.separate_with_commas(),
            self.0.price.separate_with_commas()
        )
    }

    pub fn poster(&self) -> String {
        format!("{} • {}", self.0.world, self.0.ingame_name)
    }
}

impl Display for ListingCard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "  {}", self.terms())?;
        writeln!(f, "  {}", self.poster())?;
        if let Some(message) = &self.0.message {
            writeln!(f, "  \"{message}\"")?;
        }
        write!(
            f,
            "  {}",
            self.0.timestamp.with_timezone(&Local).format("%H:%M:%S")
        )
    }
}
