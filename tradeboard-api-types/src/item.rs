use crate::deserialize_custom::{
    deserialize_flag, deserialize_optional_text, deserialize_price, deserialize_text,
};
use serde::{Deserialize, Serialize};

/// A catalog entry. Upstream sends every attribute as a string, these are parsed
/// once when the payload is read so nothing downstream has to re-parse them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub street_price: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub shop_price: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub high_alchemy: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub low_alchemy: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub members: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub shop: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_url: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    /// Has a street or shop value, i.e. something players would actually trade.
    pub fn is_tradeable(&self) -> bool {
        self.street_price.is_some() || self.shop_price.is_some()
    }

    pub fn name_contains(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty() || self.name.to_lowercase().contains(needle_lowercase)
    }
}

#[cfg(test)]
mod test {
    use super::Item;
    use crate::ItemsView;

    #[test]
    fn parse_upstream_item() {
        let json = r#"{
            "name": "Rune Scimitar",
            "location": "Player Smiths",
            "street_price": "0",
            "shop_price": "25000",
            "members": "false",
            "shop": "true",
            "high_alchemy": "12000",
            "low_alchemy": "8000",
            "logo_url": ""
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Rune Scimitar");
        assert_eq!(item.street_price, None);
        assert_eq!(item.shop_price, Some(25000));
        assert_eq!(item.high_alchemy, Some(12000));
        assert_eq!(item.low_alchemy, Some(8000));
        assert!(!item.members);
        assert!(item.shop);
        assert_eq!(item.logo_url, None);
        assert!(item.is_tradeable());
    }

    #[test]
    fn malformed_fields_fall_back() {
        let json = r#"{
            "name": "Mystery Box",
            "location": null,
            "street_price": "a lot",
            "shop_price": null,
            "members": "TRUE",
            "shop": 1,
            "high_alchemy": [1, 2],
            "low_alchemy": {"coins": 5},
            "logo_url": "https://img.example/box.png"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.location, "");
        assert_eq!(item.street_price, None);
        assert_eq!(item.shop_price, None);
        assert_eq!(item.high_alchemy, None);
        assert_eq!(item.low_alchemy, None);
        assert!(!item.members);
        assert!(!item.shop);
        assert_eq!(item.logo_url.as_deref(), Some("https://img.example/box.png"));
        assert!(!item.is_tradeable());
    }

    #[test]
    fn missing_optional_fields() {
        let item: Item = serde_json::from_str(r#"{"name": "Bones"}"#).unwrap();
        assert_eq!(item, Item::new("Bones", ""));
    }

    #[test]
    fn numeric_fields_are_accepted() {
        let json = r#"{"name": "Coins", "street_price": 3, "shop_price": 0}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.street_price, Some(3));
        assert_eq!(item.shop_price, None);
    }

    #[test]
    fn json_booleans_do_not_set_flags() {
        let json = r#"{"name": "Coins", "members": true, "shop": true}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(!item.members);
        assert!(!item.shop);
    }

    #[test]
    fn prices_read_the_leading_integer() {
        let json = r#"{
            "name": "Party hat",
            "street_price": "12.5",
            "shop_price": 12.5,
            "high_alchemy": "5000000000",
            "low_alchemy": 5000000000
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.street_price, Some(12));
        assert_eq!(item.shop_price, Some(12));
        assert_eq!(item.high_alchemy, Some(5_000_000_000));
        assert_eq!(item.low_alchemy, Some(5_000_000_000));
    }

    #[test]
    fn serialized_item_reads_back() {
        let mut item = Item::new("Lobster", "Fishing");
        item.street_price = Some(150);
        item.logo_url = Some("https://img.example/lobster.png".to_string());
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn items_view_requires_items() {
        assert!(serde_json::from_str::<ItemsView>(r#"{"things": []}"#).is_err());
        let view: ItemsView = serde_json::from_str(r#"{"items": [{"name": "Bones"}]}"#).unwrap();
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        let item = Item::new("Rune Scimitar", "");
        assert!(item.name_contains("rune"));
        assert!(item.name_contains("scim"));
        assert!(item.name_contains(""));
        assert!(!item.name_contains("dragon"));
    }
}
