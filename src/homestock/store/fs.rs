use super::{DataStore, STORAGE_KEY};
use crate::error::{HomestockError, Result};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(format!("{}.json", STORAGE_KEY))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HomestockError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Item>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(HomestockError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<Item> = serde_json::from_str(&content).map_err(|e| {
            HomestockError::Store(format!("{} is corrupt: {}", data_file.display(), e))
        })?;
        debug!(count = items.len(), path = %data_file.display(), "loaded inventory");
        Ok(items)
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        self.ensure_dir()?;
        let data_file = self.data_file();
        let content = serde_json::to_string_pretty(items).map_err(HomestockError::Serialization)?;

        // Write then rename so a failed write never truncates the collection.
        let tmp = data_file.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(HomestockError::Io)?;
        fs::rename(&tmp, &data_file).map_err(HomestockError::Io)?;
        debug!(count = items.len(), path = %data_file.display(), "saved inventory");
        Ok(())
    }
}
