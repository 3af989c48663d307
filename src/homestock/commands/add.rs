use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_of;
use crate::inventory::InventoryStore;
use crate::model::ItemDraft;
use crate::store::DataStore;

pub fn run<S: DataStore, C: Clock>(
    inventory: &mut InventoryStore<S, C>,
    draft: ItemDraft,
) -> Result<CmdResult> {
    let item = inventory.add_item(draft)?;
    let index = index_of(inventory.items(), &item.id)
        .map(|idx| idx.to_string())
        .unwrap_or_default();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item added ({}): {}",
        index, item.name
    )));
    Ok(result.with_affected_items(vec![item]))
}
