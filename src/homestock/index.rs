//! # Display Indexes
//!
//! Item ids are opaque and long, so the CLI also lets users refer to items by
//! their 1-based position in the collection (`homestock edit 3`). The
//! position is assigned over the whole collection, so an item keeps the same
//! index in every view, filtered or not, until the collection changes.
//!
//! An `id:` prefix always selects by id, for ids that look like indexes.

use crate::error::{HomestockError, Result};
use crate::model::{Item, ItemId};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Forces an input to be read as an id.
pub const ID_PREFIX: &str = "id:";

/// A user input naming one item: its display index, its id, or `id:<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Index(DisplayIndex),
    Id(ItemId),
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Index(idx) => write!(f, "{}", idx),
            ItemSelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

impl FromStr for ItemSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty item selector".to_string());
        }
        if let Some(id) = s.strip_prefix(ID_PREFIX) {
            let id = id.trim();
            if id.is_empty() {
                return Err(format!("Missing id after {}", ID_PREFIX));
            }
            return Ok(ItemSelector::Id(ItemId::from(id)));
        }
        // Small numbers are indexes; anything longer is taken as an id
        // (timestamp ids from older exports are all digits).
        match s.parse::<usize>() {
            Ok(n) if s.len() < 10 => Ok(ItemSelector::Index(DisplayIndex(n))),
            _ => Ok(ItemSelector::Id(ItemId::from(s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub index: DisplayIndex,
    pub item: Item,
}

/// Pairs each item with its display index.
pub fn index_items(items: &[Item]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            index: DisplayIndex(i + 1),
            item: item.clone(),
        })
        .collect()
}

/// Display index of the item with `id`.
pub fn index_of(items: &[Item], id: &ItemId) -> Option<DisplayIndex> {
    items
        .iter()
        .position(|item| &item.id == id)
        .map(|i| DisplayIndex(i + 1))
}

pub fn resolve(items: &[Item], selector: &ItemSelector) -> Result<ItemId> {
    match selector {
        ItemSelector::Index(DisplayIndex(n)) => n
            .checked_sub(1)
            .and_then(|i| items.get(i))
            .map(|item| item.id.clone())
            .ok_or_else(|| HomestockError::Api(format!("Index {} not found", n))),
        ItemSelector::Id(id) => items
            .iter()
            .find(|item| &item.id == id)
            .map(|item| item.id.clone())
            .ok_or_else(|| HomestockError::ItemNotFound(id.clone())),
    }
}
