use crate::Item;
use serde::{Deserialize, Serialize};

/// Checkbox state of the catalog search. Both off shows everything.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ItemFilters {
    pub tradeable: bool,
    pub members_only: bool,
}

impl ItemFilters {
    pub fn is_active(&self) -> bool {
        self.tradeable || self.members_only
    }

    pub fn matches(&self, item: &Item) -> bool {
        (!self.tradeable || item.is_tradeable()) && (!self.members_only || item.members)
    }
}

#[cfg(test)]
mod test {
    use super::ItemFilters;
    use crate::Item;

    #[test]
    fn filter_matching() {
        let mut scimitar = Item::new("Rune Scimitar", "Player Smiths");
        scimitar.shop_price = Some(25000);
        let bones = Item::new("Bones", "Everywhere");

        let tradeable = ItemFilters {
            tradeable: true,
            members_only: false,
        };
        assert!(tradeable.matches(&scimitar));
        assert!(!tradeable.matches(&bones));

        let members = ItemFilters {
            tradeable: false,
            members_only: true,
        };
        assert!(!members.matches(&scimitar));
        assert!(members.is_active());

        assert!(ItemFilters::default().matches(&bones));
        assert!(!ItemFilters::default().is_active());
    }
}
