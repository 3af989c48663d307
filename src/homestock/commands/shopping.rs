use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::store::DataStore;

pub fn run<S: DataStore, C: Clock>(inventory: &InventoryStore<S, C>) -> Result<CmdResult> {
    Ok(CmdResult {
        shopping_list: Some(inventory.shopping_list()),
        ..CmdResult::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Room;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn computed_empty_list_is_distinct_from_none() {
        let inventory = StoreFixture::new()
            .with_stock("Savon", Room::SalleBain, "6", "2")
            .open();
        let list = run(&inventory).unwrap().shopping_list;
        assert!(list.as_ref().is_some_and(|l| l.is_empty()));
        assert!(CmdResult::default().shopping_list.is_none());
    }

    #[test]
    fn lists_low_stock_items() {
        let inventory = StoreFixture::new()
            .with_stock("Savon", Room::SalleBain, "1", "2")
            .with_stock("Dentifrice", Room::SalleBain, "4", "1")
            .open();
        let list = run(&inventory).unwrap().shopping_list.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].name, "Savon");
    }
}
