use crate::{AppError, AppResult, CatalogStore, ListingFeed, NewListing, Notices, Search};
use item_catalog::CatalogSource;
use tracing::warn;
use tradeboard_api_types::{Item, ItemFilters, Listing, ListingType, World};

/// Form state for the next post. Reset after every successful submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub listing_type: ListingType,
    pub quantity: String,
    pub price: String,
    pub message: String,
    pub world: World,
    pub ingame_name: String,
}

impl ListingDraft {
    fn as_new_listing(&self) -> NewListing<'_> {
        NewListing {
            listing_type: self.listing_type,
            quantity: &self.quantity,
            price: &self.price,
            ingame_name: &self.ingame_name,
            world: self.world,
            message: Some(&self.message),
        }
    }
}

/// Everything one visitor's board holds: catalog, search box, selection, the
/// post form and the feed.
#[derive(Debug, Default)]
pub struct MarketSession {
    catalog: CatalogStore,
    feed: ListingFeed,
    search_term: String,
    filters: ItemFilters,
    selected: Option<String>,
    draft: ListingDraft,
    notices: Notices,
}

impl MarketSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(feed: ListingFeed) -> Self {
        Self {
            feed,
            ..Self::default()
        }
    }

    pub async fn load_catalog<S>(&mut self, source: &S)
    where
        S: CatalogSource + ?Sized,
    {
        self.catalog.load(source).await;
        if self
            .selected
            .as_deref()
            .is_some_and(|name| self.catalog.find(name).is_none())
        {
            self.selected = None;
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn feed(&self) -> &ListingFeed {
        &self.feed
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The result grid is only shown while something is typed in the search box.
    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn filters(&self) -> ItemFilters {
        self.filters
    }

    pub fn set_tradeable(&mut self, tradeable: bool) {
        self.filters.tradeable = tradeable;
    }

    pub fn set_members_only(&mut self, members_only: bool) {
        self.filters.members_only = members_only;
    }

    pub fn clear_filters(&mut self) {
        self.filters = ItemFilters::default();
    }

    pub fn results(&self) -> Search<'_> {
        self.catalog.search(&self.search_term, self.filters)
    }

    pub fn result_count(&self) -> usize {
        self.results().count()
    }

    pub fn select_item(&mut self, name: &str) -> AppResult<&Item> {
        let name = self
            .catalog
            .find(name)
            .map(|item| item.name.clone())
            .ok_or_else(|| AppError::UnknownItem(name.to_string()))?;
        self.selected = Some(name);
        self.selected_item().ok_or(AppError::NoItemSelected)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.as_deref().and_then(|name| self.catalog.find(name))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ListingDraft {
        &mut self.draft
    }

    /// Posts the draft for the selected item. Validation problems are also queued
    /// as a notice for the user; the draft is kept so it can be corrected.
    pub fn submit_listing(&mut self) -> AppResult<&Listing> {
        let item = self
            .selected_item()
            .cloned()
            .ok_or(AppError::NoItemSelected)?;
        match self.feed.create(&item, self.draft.as_new_listing()) {
            Ok(listing) => {
                self.draft = ListingDraft::default();
                self.notices.success(format!(
                    "Posted {} for {}",
                    listing.listing_type.abbreviation(),
                    listing.item.name
                ));
                Ok(listing)
            }
            Err(e) => {
                warn!("listing rejected: {e}");
                self.notices.warning(e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }
}
