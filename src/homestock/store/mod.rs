//! # Storage Layer
//!
//! The inventory is persisted as a whole: one JSON array of item records under
//! a fixed storage key. The [`DataStore`] trait is the persistence
//! collaborator the core talks to, so the same logic runs against a file on
//! disk or against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, `<data dir>/inventoryItems.json`
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── inventoryItems.json   # JSON array of items
//! └── config.json           # HomestockConfig
//! ```
//!
//! Quantities and thresholds may be strings or numbers, and dates are
//! `YYYY-MM-DD` strings; see [`crate::model::Item`].

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Fixed key the collection is stored under.
pub const STORAGE_KEY: &str = "inventoryItems";

pub trait DataStore {
    /// The stored collection, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<Vec<Item>>;

    /// Replace the stored collection.
    fn save(&mut self, items: &[Item]) -> Result<()>;
}
