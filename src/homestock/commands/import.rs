use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HomestockError, Result};
use crate::inventory::InventoryStore;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Replaces the whole collection with the items in a JSON file. A rejected
/// file leaves the collection as it was.
pub fn run<S: DataStore, C: Clock>(
    inventory: &mut InventoryStore<S, C>,
    path: &Path,
) -> Result<CmdResult> {
    let payload = fs::read_to_string(path).map_err(HomestockError::Io)?;
    let previous = inventory.items().len();
    let count = inventory.replace_all_from_json(&payload)?;

    let mut result = CmdResult::default();
    if previous > 0 {
        result.add_message(CmdMessage::info(format!("Replaced {} items.", previous)));
    }
    result.add_message(CmdMessage::success(format!(
        "Imported {} items from {}",
        count,
        path.display()
    )));
    Ok(result)
}
