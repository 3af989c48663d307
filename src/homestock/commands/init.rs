use crate::commands::{CmdMessage, CmdResult, HomestockPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &HomestockPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized homestock data at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
