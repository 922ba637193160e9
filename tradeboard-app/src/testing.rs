use async_trait::async_trait;
use item_catalog::{CatalogSource, Error};
use tradeboard_api_types::{Item, ItemsView};

/// Hands out a fixed list, or fails like a response without an `items` field.
pub(crate) struct StaticSource(pub Option<Vec<Item>>);

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, Error> {
        match &self.0 {
            Some(items) => Ok(items.clone()),
            None => Err(serde_json::from_str::<ItemsView>("{}").unwrap_err().into()),
        }
    }
}

pub(crate) fn rune_scimitar() -> Item {
    Item {
        name: "Rune Scimitar".to_string(),
        location: "Player Smiths".to_string(),
        street_price: None,
        shop_price: Some(25000),
        high_alchemy: Some(12000),
        low_alchemy: Some(8000),
        members: false,
        shop: false,
        logo_url: None,
    }
}

pub(crate) fn sample_catalog() -> Vec<Item> {
    let mut dragon_dagger = Item::new("Dragon Dagger", "Champions' Guild");
    dragon_dagger.street_price = Some(30000);
    dragon_dagger.members = true;

    let mut rune_platebody = Item::new("Rune Platebody", "Oziach");
    rune_platebody.shop_price = Some(84500);

    let bones = Item::new("Bones", "Everywhere");

    let mut rune_essence = Item::new("Rune essence", "Essence mine");
    rune_essence.members = true;

    vec![
        rune_scimitar(),
        dragon_dagger,
        rune_platebody,
        bones,
        rune_essence,
    ]
}
