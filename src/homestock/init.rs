use crate::api::{HomestockApi, HomestockPaths};
use crate::clock::SystemClock;
use crate::config::HomestockConfig;
use crate::error::{HomestockError, Result};
use crate::inventory::InventoryStore;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "HOMESTOCK_HOME";

pub struct HomestockContext {
    pub api: HomestockApi<FileStore, SystemClock>,
    pub config: HomestockConfig,
}

/// Picks the data directory: an explicit override first, then `$HOMESTOCK_HOME`,
/// then the platform data dir.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "homestock", "homestock")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HomestockError::Api("Could not determine data dir".to_string()))
}

pub fn initialize(override_dir: Option<&Path>) -> Result<HomestockContext> {
    build_context(override_dir, InventoryStore::open)
}

/// [`initialize`] for commands that must work over a corrupt inventory file
/// (import, config, init): unreadable items start an empty collection.
pub fn initialize_recovering(override_dir: Option<&Path>) -> Result<HomestockContext> {
    build_context(override_dir, InventoryStore::open_or_empty)
}

type Opener = fn(FileStore, SystemClock) -> Result<InventoryStore<FileStore, SystemClock>>;

fn build_context(override_dir: Option<&Path>, open: Opener) -> Result<HomestockContext> {
    let data_dir = resolve_data_dir(override_dir)?;
    let config = HomestockConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config: {}", e);
        HomestockConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let inventory = open(store, SystemClock)?;
    let api = HomestockApi::new(inventory, HomestockPaths { data_dir });

    Ok(HomestockContext { api, config })
}
