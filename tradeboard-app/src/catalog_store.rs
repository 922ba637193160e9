use item_catalog::CatalogSource;
use tracing::{error, info};
use tradeboard_api_types::{Item, ItemFilters};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    NotLoaded,
    Loaded {
        items: usize,
    },
    /// The fetch failed and the catalog was left empty.
    Failed,
}

/// The read-only item catalog. Filled once at startup.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    items: Vec<Item>,
    status: CatalogStatus,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            status: CatalogStatus::Loaded { items: items.len() },
            items,
        }
    }

    /// Single best effort fetch. Any failure leaves an empty catalog behind and
    /// is only logged.
    pub async fn load<S>(&mut self, source: &S)
    where
        S: CatalogSource + ?Sized,
    {
        match source.fetch_items().await {
            Ok(items) => {
                info!(items = items.len(), "item catalog loaded");
                self.status = CatalogStatus::Loaded { items: items.len() };
                self.items = items;
            }
            Err(e) => {
                error!("Error loading items: {e}");
                self.status = CatalogStatus::Failed;
                self.items.clear();
            }
        }
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact name lookup, falling back to a case-insensitive match.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .or_else(|| {
                let name = name.to_lowercase();
                self.items.iter().find(|item| item.name.to_lowercase() == name)
            })
    }

    /// Lazily filters the catalog. The returned iterator can be cloned to run the
    /// same query again.
    pub fn search(&self, term: &str, filters: ItemFilters) -> Search<'_> {
        Search {
            items: self.items.iter(),
            needle: term.to_lowercase(),
            filters,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Search<'a> {
    items: std::slice::Iter<'a, Item>,
    needle: String,
    filters: ItemFilters,
}

impl<'a> Iterator for Search<'a> {
    type Item = &'a tradeboard_api_types::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Search {
            items,
            needle,
            filters,
        } = self;
        let needle = needle.as_str();
        let filters = *filters;
        items.find(|item| item.name_contains(needle) && filters.matches(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}
