//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every homestock operation, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (display indexes and ids to [`ItemId`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Generic Over DataStore and Clock
//!
//! `HomestockApi<S: DataStore, C: Clock>`:
//! - Production: `HomestockApi<FileStore, SystemClock>`
//! - Testing: `HomestockApi<InMemoryStore, FixedClock>`
//!
//! API tests check that inputs are normalized and routed. Command behavior
//! is tested in the command modules.

use crate::clock::Clock;
use crate::commands;
use crate::error::{HomestockError, Result};
use crate::filter::FilterCriteria;
use crate::index::{self, ItemSelector};
use crate::inventory::InventoryStore;
use crate::model::{ItemDraft, ItemId};
use crate::store::DataStore;
use std::path::Path;
use std::str::FromStr;

pub struct HomestockApi<S: DataStore, C: Clock> {
    inventory: InventoryStore<S, C>,
    paths: commands::HomestockPaths,
}

impl<S: DataStore, C: Clock> HomestockApi<S, C> {
    pub fn new(inventory: InventoryStore<S, C>, paths: commands::HomestockPaths) -> Self {
        Self { inventory, paths }
    }

    pub fn inventory(&self) -> &InventoryStore<S, C> {
        &self.inventory
    }

    pub fn paths(&self) -> &commands::HomestockPaths {
        &self.paths
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, draft)
    }

    pub fn update_item(&mut self, selector: &str, patch: ItemPatch) -> Result<commands::CmdResult> {
        let id = self.resolve_one(selector)?;
        commands::update::run(&mut self.inventory, &id, patch)
    }

    pub fn delete_items<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve_ids(selectors)?;
        commands::delete::run(&mut self.inventory, &ids)
    }

    pub fn view_items<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve_ids(selectors)?;
        commands::view::run(&self.inventory, &ids)
    }

    pub fn list_items(&self, criteria: &FilterCriteria) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory, criteria)
    }

    pub fn suggest(&self, term: &str) -> Result<commands::CmdResult> {
        commands::suggest::run(&self.inventory, term)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.inventory)
    }

    pub fn room_map(&self) -> Result<commands::CmdResult> {
        commands::map::run(&self.inventory)
    }

    pub fn shopping_list(&self) -> Result<commands::CmdResult> {
        commands::shopping::run(&self.inventory)
    }

    pub fn export_items(&self, target: ExportTarget) -> Result<commands::CmdResult> {
        commands::export::run(&self.inventory, target)
    }

    pub fn import_items(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.inventory, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    /// Resolves selectors to ids, keeping first-seen order and dropping
    /// repeats so `delete 2 2` removes one item.
    pub fn resolve_ids<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<ItemId>> {
        let mut ids: Vec<ItemId> = Vec::with_capacity(selectors.len());
        for raw in selectors {
            let id = self.resolve_one(raw.as_ref())?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    fn resolve_one(&self, raw: &str) -> Result<ItemId> {
        let selector = ItemSelector::from_str(raw).map_err(HomestockError::Api)?;
        index::resolve(self.inventory.items(), &selector)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportTarget;
pub use crate::commands::{
    CmdMessage, CmdResult, HomestockPaths, ItemPatch, MessageLevel, RoomGroup,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::{ItemType, Room, Status};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api(fixture: StoreFixture) -> HomestockApi<InMemoryStore, FixedClock> {
        HomestockApi::new(
            fixture.open(),
            HomestockPaths {
                data_dir: PathBuf::from("/nonexistent"),
            },
        )
    }

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_object("Lampe", Room::Salon)
            .with_food("Pain", Room::Cuisine, Status::Fresh)
            .with_object("Pince", Room::Garage)
    }

    #[test]
    fn indexes_and_ids_resolve_to_same_item() {
        let api = api(fixture());
        let ids = api.resolve_ids(&["2", "2", "1"]).unwrap();
        assert_eq!(ids, vec![ItemId::from("2"), ItemId::from("1")]);
    }

    #[test]
    fn out_of_range_index_is_an_api_error() {
        let api = api(fixture());
        let err = api.view_items(&["9"]).unwrap_err();
        assert!(matches!(err, HomestockError::Api(_)));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let api = api(fixture());
        let err = api.view_items(&["does-not-exist"]).unwrap_err();
        assert!(matches!(err, HomestockError::ItemNotFound(_)));
    }

    #[test]
    fn delete_by_index_routes_to_command() {
        let mut api = api(fixture());
        let result = api.delete_items(&["3"]).unwrap();
        assert_eq!(result.affected_items[0].name, "Pince");
        assert_eq!(api.inventory().items().len(), 2);
    }

    #[test]
    fn update_by_index() {
        let mut api = api(fixture());
        let patch = ItemPatch {
            room: Some(Room::Bureau),
            ..ItemPatch::default()
        };
        api.update_item("1", patch).unwrap();
        assert_eq!(
            api.inventory().items()[0].room.room(),
            Some(Room::Bureau)
        );
    }

    #[test]
    fn add_then_list() {
        let mut api = api(StoreFixture::new());
        api.add_item(ItemDraft::new("Radio", ItemType::Object, Room::Salon))
            .unwrap();
        let result = api.list_items(&FilterCriteria::new()).unwrap();
        assert_eq!(result.room_groups.len(), 1);
        assert_eq!(result.room_groups[0].room, Room::Salon);
    }
}
