//! # Inventory Store
//!
//! [`InventoryStore`] owns the authoritative item collection. Every mutation
//! goes through it: it assigns ids, stamps each written item with a freshly
//! computed [`Status`], and persists the whole collection through its
//! [`DataStore`] before the change becomes visible.
//!
//! Mutations build the next collection aside, save it, and only then swap it
//! in. A failed validation or a failed save leaves the in-memory collection
//! exactly as it was.
//!
//! Read-only views (filtering, grouping, statistics, shopping list) are thin
//! wrappers over the pure engines in [`crate::filter`], [`crate::aggregate`]
//! and [`crate::shopping`].

use crate::aggregate::{self, StatKey, StatRecord, Summary};
use crate::clock::Clock;
use crate::error::{HomestockError, Result};
use crate::filter::{self, FilterCriteria};
use crate::model::{Item, ItemDraft, ItemId, Room, RoomKey, Status};
use crate::shopping::{self, ShoppingList};
use crate::status::compute_status;
use crate::store::DataStore;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

pub struct InventoryStore<S: DataStore, C: Clock> {
    store: S,
    clock: C,
    items: Vec<Item>,
}

impl<S: DataStore, C: Clock> InventoryStore<S, C> {
    /// Loads the persisted collection.
    pub fn open(store: S, clock: C) -> Result<Self> {
        let items = store.load()?;
        debug!(count = items.len(), "opened inventory");
        Ok(Self {
            store,
            clock,
            items,
        })
    }

    /// Like [`open`](Self::open), but unreadable stored data starts an empty
    /// collection instead of failing. The file is only overwritten by the
    /// next successful mutation.
    pub fn open_or_empty(store: S, clock: C) -> Result<Self> {
        let items = match store.load() {
            Ok(items) => items,
            Err(HomestockError::Store(reason)) => {
                warn!(%reason, "starting from an empty inventory");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            store,
            clock,
            items,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Result<&Item> {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| HomestockError::ItemNotFound(id.clone()))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item> {
        validate_draft(&draft)?;
        validate_room(&draft.room)?;
        let item = self.stamp(ItemId::generate(), draft, self.today());

        let mut next = self.items.clone();
        next.push(item.clone());
        self.commit(next)?;

        debug!(id = %item.id, status = %item.status, "added item");
        Ok(item)
    }

    pub fn update_item(&mut self, id: &ItemId, draft: ItemDraft) -> Result<Item> {
        let position = self.position(id)?;
        validate_draft(&draft)?;
        // Imported records may sit in a room we don't know; they stay editable
        // as long as the room is left alone.
        if draft.room != self.items[position].room {
            validate_room(&draft.room)?;
        }
        let item = self.stamp(id.clone(), draft, self.today());

        let mut next = self.items.clone();
        next[position] = item.clone();
        self.commit(next)?;

        debug!(id = %item.id, status = %item.status, "updated item");
        Ok(item)
    }

    pub fn delete_item(&mut self, id: &ItemId) -> Result<Item> {
        let position = self.position(id)?;

        let mut next = self.items.clone();
        let removed = next.remove(position);
        self.commit(next)?;

        debug!(id = %removed.id, "deleted item");
        Ok(removed)
    }

    /// Replaces the whole collection, or rejects the input and keeps the
    /// current one. Every record's status is recomputed for today.
    pub fn replace_all(&mut self, items: Vec<Item>) -> Result<()> {
        validate_import(&items)?;
        let today = self.today();
        let next: Vec<Item> = items
            .into_iter()
            .map(|mut item| {
                item.status = compute_status(&item, today);
                item
            })
            .collect();
        let count = next.len();
        self.commit(next)?;

        info!(count, "replaced inventory");
        Ok(())
    }

    /// [`replace_all`](Self::replace_all) from a JSON document, which must be
    /// an array of item records.
    pub fn replace_all_from_json(&mut self, payload: &str) -> Result<usize> {
        let items = parse_import(payload)?;
        let count = items.len();
        self.replace_all(items)?;
        Ok(count)
    }

    /// The full collection, as stored.
    pub fn export_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn export_json(&self) -> Result<String> {
        let payload = serde_json::to_string_pretty(&self.items)?;
        info!(count = self.items.len(), "exported inventory");
        Ok(payload)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Item> {
        filter::filter(&self.items, criteria)
    }

    pub fn suggestions(&self, term: &str) -> Vec<String> {
        filter::suggestions(&self.items, term)
    }

    pub fn by_room(&self) -> BTreeMap<Room, Vec<&Item>> {
        aggregate::group_by_room(&self.items)
    }

    pub fn stats(&self) -> BTreeMap<StatKey, StatRecord> {
        aggregate::room_type_stats(&self.items)
    }

    pub fn room_counts(&self) -> BTreeMap<Room, usize> {
        aggregate::count_by_room(&self.items)
    }

    pub fn summary(&self) -> Summary {
        aggregate::summary(&self.items, self.today())
    }

    pub fn shopping_list(&self) -> ShoppingList {
        shopping::build_shopping_list(&self.items)
    }

    fn position(&self, id: &ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| HomestockError::ItemNotFound(id.clone()))
    }

    fn stamp(&self, id: ItemId, draft: ItemDraft, today: NaiveDate) -> Item {
        let mut item = Item::from_draft(id, draft, Status::Fresh);
        item.status = compute_status(&item, today);
        item
    }

    fn commit(&mut self, next: Vec<Item>) -> Result<()> {
        self.store.save(&next)?;
        self.items = next;
        Ok(())
    }
}

fn validate_draft(draft: &ItemDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(HomestockError::InvalidItem("name cannot be empty".into()));
    }
    Ok(())
}

fn validate_room(room: &RoomKey) -> Result<()> {
    match room {
        RoomKey::Known(_) => Ok(()),
        RoomKey::Unknown(raw) => Err(HomestockError::InvalidItem(format!(
            "unknown room: {}",
            raw
        ))),
    }
}

fn validate_import(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::new();
    for (position, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(HomestockError::InvalidImport(format!(
                "record {} has an empty name",
                position + 1
            )));
        }
        if !seen.insert(&item.id) {
            return Err(HomestockError::InvalidImport(format!(
                "duplicate id {}",
                item.id
            )));
        }
    }
    Ok(())
}

fn parse_import(payload: &str) -> Result<Vec<Item>> {
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| HomestockError::InvalidImport(format!("not valid JSON: {}", e)))?;
    let serde_json::Value::Array(records) = value else {
        return Err(HomestockError::InvalidImport(
            "expected a JSON array of items".into(),
        ));
    };

    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            serde_json::from_value(record).map_err(|e| {
                HomestockError::InvalidImport(format!("record {}: {}", position + 1, e))
            })
        })
        .collect()
}
