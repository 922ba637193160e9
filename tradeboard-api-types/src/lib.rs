mod deserialize_custom;
mod item;
mod listings;

pub mod search;
pub mod world;

pub use item::Item;
pub use listings::{Listing, ListingId, ListingType, ParseListingTypeError};
pub use search::ItemFilters;
pub use world::World;

use serde::{Deserialize, Serialize};

/// Body returned by the catalog endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsView {
    pub items: Vec<Item>,
}
