use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_of, DisplayItem};
use crate::inventory::InventoryStore;
use crate::model::ItemId;
use crate::store::DataStore;

pub fn run<S: DataStore, C: Clock>(
    inventory: &InventoryStore<S, C>,
    ids: &[ItemId],
) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(ids.len());
    for id in ids {
        let item = inventory.get(id)?.clone();
        if let Some(index) = index_of(inventory.items(), id) {
            listed.push(DisplayItem { index, item });
        }
    }
    Ok(CmdResult::default().with_listed_items(listed))
}
