use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::store::DataStore;

pub fn run<S: DataStore, C: Clock>(inventory: &InventoryStore<S, C>) -> Result<CmdResult> {
    Ok(CmdResult {
        room_counts: Some(inventory.room_counts()),
        ..CmdResult::default()
    })
}
