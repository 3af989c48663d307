use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::model::ItemId;
use crate::store::DataStore;

pub fn run<S: DataStore, C: Clock>(
    inventory: &mut InventoryStore<S, C>,
    ids: &[ItemId],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let item = inventory.delete_item(id)?;
        result.add_message(CmdMessage::success(format!("Item deleted: {}", item.name)));
        result.affected_items.push(item);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HomestockError;
    use crate::model::Room;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_items() {
        let mut inventory = StoreFixture::new()
            .with_object("Lampe", Room::Salon)
            .with_object("Tapis", Room::Salon)
            .open();
        let id = inventory.items()[0].id.clone();

        let result = run(&mut inventory, &[id]).unwrap();
        assert_eq!(result.affected_items[0].name, "Lampe");
        assert_eq!(inventory.items().len(), 1);
        assert_eq!(inventory.items()[0].name, "Tapis");
    }

    #[test]
    fn missing_item_is_reported() {
        let mut inventory = StoreFixture::new().with_object("Lampe", Room::Salon).open();
        let err = run(&mut inventory, &[ItemId::from("ghost")]).unwrap_err();
        assert!(matches!(err, HomestockError::ItemNotFound(_)));
        assert_eq!(inventory.items().len(), 1);
    }
}
