//! Session state for the trade board: the item catalog, the listing feed and
//! everything the UI needs to drive them.

mod catalog_store;
mod error;
mod listing_feed;
mod session;

pub mod display;
pub mod notices;

#[cfg(test)]
mod testing;

pub use catalog_store::{CatalogStatus, CatalogStore, Search};
pub use error::{AppError, AppResult};
pub use listing_feed::{ListingError, ListingFeed, NewListing, RequiredField};
pub use notices::{Notice, NoticeLevel, Notices};
pub use session::{ListingDraft, MarketSession};
