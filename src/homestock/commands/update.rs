use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult, ItemPatch};
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::model::ItemId;
use crate::store::DataStore;

pub fn run<S: DataStore, C: Clock>(
    inventory: &mut InventoryStore<S, C>,
    id: &ItemId,
    patch: ItemPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    let draft = patch.apply(inventory.get(id)?.to_draft());
    let item = inventory.update_item(id, draft)?;

    result.add_message(CmdMessage::success(format!("Item updated: {}", item.name)));
    Ok(result.with_affected_items(vec![item]))
}
