use chrono::{DateTime, Utc};
use std::fmt::Display;
use thiserror::Error;
use tracing::info;
use tradeboard_api_types::{Item, Listing, ListingId, ListingType, World};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Quantity,
    Price,
    IngameName,
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RequiredField::Quantity => "quantity",
            RequiredField::Price => "price",
            RequiredField::IngameName => "in-game name",
        })
    }
}

fn field_list(fields: &[RequiredField]) -> String {
    match fields {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => {
            let rest: Vec<String> = rest.iter().map(|f| f.to_string()).collect();
            format!("{}, and {last}", rest.join(", "))
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("Please fill in {}", field_list(.0))]
    MissingFields(Vec<RequiredField>),
    #[error("The {0} must be a whole number above zero")]
    InvalidNumber(RequiredField),
}

/// Raw form input for a new listing, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewListing<'a> {
    pub listing_type: ListingType,
    pub quantity: &'a str,
    pub price: &'a str,
    pub ingame_name: &'a str,
    pub world: World,
    pub message: Option<&'a str>,
}

/// Newest-first feed of posts made this session. Only ever grows.
#[derive(Clone, Debug)]
pub struct ListingFeed {
    listings: Vec<Listing>,
    last_id: u64,
}

impl Default for ListingFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingFeed {
    /// A feed holding the example post shown to first time visitors.
    pub fn new() -> Self {
        let seed = Listing {
            id: ListingId(1),
            listing_type: ListingType::Buy,
            item: Item::new("Rune Scimitar", "Player Smiths"),
            quantity: 1,
            price: 30000,
            message: Some("Looking for a good deal!".to_string()),
            world: World::default(),
            ingame_name: "Player123".to_string(),
            timestamp: Utc::now(),
        };
        Self {
            last_id: seed.id.0,
            listings: vec![seed],
        }
    }

    pub fn empty() -> Self {
        Self {
            listings: Vec::new(),
            last_id: 0,
        }
    }

    pub fn list(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Validates the form input and puts a new listing at the top of the feed.
    /// Nothing changes when validation fails.
    pub fn create(&mut self, item: &Item, new: NewListing<'_>) -> Result<&Listing, ListingError> {
        self.create_at(item, new, Utc::now())
    }

    fn create_at(
        &mut self,
        item: &Item,
        new: NewListing<'_>,
        now: DateTime<Utc>,
    ) -> Result<&Listing, ListingError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Quantity, new.quantity),
            (RequiredField::Price, new.price),
            (RequiredField::IngameName, new.ingame_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(ListingError::MissingFields(missing));
        }
        let quantity = parse_positive(new.quantity, RequiredField::Quantity)?;
        let price = parse_positive(new.price, RequiredField::Price)?;

        let id = self.next_id(now);
        let listing = Listing {
            id,
            listing_type: new.listing_type,
            item: item.clone(),
            quantity,
            price,
            message: new
                .message
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            world: new.world,
            ingame_name: new.ingame_name.trim().to_string(),
            timestamp: now,
        };
        info!(
            id = %listing.id,
            item = %listing.item.name,
            listing_type = %listing.listing_type,
            "listing created"
        );
        self.listings.insert(0, listing);
        Ok(&self.listings[0])
    }

    /// Millisecond timestamp, bumped past the last id if the clock hasn't moved.
    fn next_id(&mut self, now: DateTime<Utc>) -> ListingId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        self.last_id = millis.max(self.last_id + 1);
        ListingId(self.last_id)
    }
}

fn parse_positive(value: &str, field: RequiredField) -> Result<u32, ListingError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or(ListingError::InvalidNumber(field))
}

#[cfg(test)]
mod test {
    use super::{ListingError, ListingFeed, NewListing, RequiredField};
    use crate::testing::rune_scimitar;
    use chrono::{TimeZone, Utc};
    use tradeboard_api_types::{ListingId, ListingType, World};

    fn bob_sells<'a>() -> NewListing<'a> {
        NewListing {
            listing_type: ListingType::Sell,
            quantity: "5",
            price: "1000",
            ingame_name: "Bob",
            world: World::new(2).unwrap(),
            message: Some(""),
        }
    }

    #[test]
    fn seeded_feed() {
        let feed = ListingFeed::new();
        assert_eq!(feed.len(), 1);
        let seed = &feed.list()[0];
        assert_eq!(seed.id, ListingId(1));
        assert_eq!(seed.listing_type, ListingType::Buy);
        assert_eq!(seed.item.name, "Rune Scimitar");
        assert_eq!(seed.item.location, "Player Smiths");
        assert_eq!(seed.quantity, 1);
        assert_eq!(seed.price, 30000);
        assert_eq!(seed.message.as_deref(), Some("Looking for a good deal!"));
        assert_eq!(seed.ingame_name, "Player123");
        assert!(ListingFeed::empty().is_empty());
    }

    #[test]
    fn create_prepends() {
        let mut feed = ListingFeed::new();
        let seed = feed.list()[0].clone();
        let item = rune_scimitar();
        let created = feed.create(&item, bob_sells()).unwrap().clone();
        assert_eq!(created.listing_type, ListingType::Sell);
        assert_eq!(created.quantity, 5);
        assert_eq!(created.price, 1000);
        assert_eq!(created.ingame_name, "Bob");
        assert_eq!(created.world.id(), 2);
        assert_eq!(created.message, None);
        assert_eq!(created.item, item);
        assert_eq!(feed.list(), &[created, seed]);
    }

    #[test]
    fn missing_fields_reject_without_mutation() {
        let mut feed = ListingFeed::new();
        let before = feed.list().to_vec();
        let item = rune_scimitar();

        let err = feed
            .create(
                &item,
                NewListing {
                    quantity: "",
                    price: " ",
                    ingame_name: "",
                    ..bob_sells()
                },
            )
            .unwrap_err();
        assert_eq!(
            err,
            ListingError::MissingFields(vec![
                RequiredField::Quantity,
                RequiredField::Price,
                RequiredField::IngameName
            ])
        );
        assert_eq!(
            err.to_string(),
            "Please fill in quantity, price, and in-game name"
        );

        let mut no_quantity = bob_sells();
        no_quantity.quantity = "";
        let mut no_price = bob_sells();
        no_price.price = "";
        let mut no_name = bob_sells();
        no_name.ingame_name = "";
        for new in [no_quantity, no_price, no_name] {
            assert!(matches!(feed.create(&item, new), Err(ListingError::MissingFields(_))));
        }
        assert_eq!(feed.list(), before.as_slice());
    }

    #[test]
    fn missing_field_messages() {
        assert_eq!(
            ListingError::MissingFields(vec![RequiredField::Price]).to_string(),
            "Please fill in price"
        );
        assert_eq!(
            ListingError::MissingFields(vec![RequiredField::Quantity, RequiredField::IngameName])
                .to_string(),
            "Please fill in quantity and in-game name"
        );
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        let mut feed = ListingFeed::empty();
        let item = rune_scimitar();
        let mut words = bob_sells();
        words.quantity = "five";
        assert_eq!(
            feed.create(&item, words),
            Err(ListingError::InvalidNumber(RequiredField::Quantity))
        );
        let mut zero = bob_sells();
        zero.price = "0";
        assert_eq!(
            feed.create(&item, zero),
            Err(ListingError::InvalidNumber(RequiredField::Price))
        );
        assert!(feed.is_empty());
    }

    #[test]
    fn snapshot_is_independent_of_catalog() {
        let mut feed = ListingFeed::empty();
        let mut item = rune_scimitar();
        feed.create(&item, bob_sells()).unwrap();
        item.shop_price = Some(1);
        item.name = "Renamed".to_string();
        assert_eq!(feed.list()[0].item, rune_scimitar());
    }

    #[test]
    fn ids_increase_even_when_clock_stalls() {
        let mut feed = ListingFeed::new();
        let item = rune_scimitar();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let first = feed.create_at(&item, bob_sells(), now).unwrap().id;
        let second = feed.create_at(&item, bob_sells(), now).unwrap().id;
        let earlier = now - chrono::Duration::seconds(10);
        let third = feed.create_at(&item, bob_sells(), earlier).unwrap().id;
        assert_eq!(first, ListingId(now.timestamp_millis() as u64));
        assert!(first < second && second < third);
        let ids: Vec<ListingId> = feed.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![third, second, first, ListingId(1)]);
    }

    #[test]
    fn message_is_kept_when_present() {
        let mut feed = ListingFeed::empty();
        let listing = feed
            .create(
                &rune_scimitar(),
                NewListing {
                    message: Some("  quick trade  "),
                    ingame_name: " Bob ",
                    ..bob_sells()
                },
            )
            .unwrap();
        assert_eq!(listing.message.as_deref(), Some("quick trade"));
        assert_eq!(listing.ingame_name, "Bob");
    }
}
