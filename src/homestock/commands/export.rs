use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HomestockError, Result};
use crate::inventory::InventoryStore;
use crate::store::DataStore;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

/// Serializes the whole collection as a JSON array. For [`ExportTarget::Stdout`]
/// the document is returned in `export_payload` for the caller to print.
pub fn run<S: DataStore, C: Clock>(
    inventory: &InventoryStore<S, C>,
    target: ExportTarget,
) -> Result<CmdResult> {
    let payload = inventory.export_json()?;
    let count = inventory.items().len();
    let mut result = CmdResult::default();

    match target {
        ExportTarget::Stdout => {
            result.export_payload = Some(payload);
        }
        ExportTarget::File(path) => {
            fs::write(&path, payload).map_err(HomestockError::Io)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} items to {}",
                count,
                path.display()
            )));
        }
    }

    Ok(result)
}
