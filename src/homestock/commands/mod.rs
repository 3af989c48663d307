use crate::aggregate::{StatKey, StatRecord, Summary};
use crate::config::HomestockConfig;
use crate::index::DisplayItem;
use crate::model::{Amount, Item, ItemDraft, ItemType, Room};
use crate::shopping::ShoppingList;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod map;
pub mod shopping;
pub mod stats;
pub mod suggest;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct HomestockPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Items of one room in the grouped list view.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGroup {
    pub room: Room,
    pub items: Vec<DisplayItem>,
}

/// Everything a command can hand back to a UI. Views that a command did not
/// compute stay empty or `None`.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<DisplayItem>,
    pub room_groups: Vec<RoomGroup>,
    pub suggestions: Vec<String>,
    pub summary: Option<Summary>,
    pub stats: Vec<(StatKey, StatRecord)>,
    pub room_counts: Option<BTreeMap<Room, usize>>,
    pub shopping_list: Option<ShoppingList>,
    pub export_payload: Option<String>,
    pub config: Option<HomestockConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_room_groups(mut self, groups: Vec<RoomGroup>) -> Self {
        self.room_groups = groups;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_config(mut self, config: HomestockConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes for an edit. `None` keeps the current value; an empty string
/// clears an optional text field.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub item_type: Option<ItemType>,
    pub room: Option<Room>,
    pub quantity: Option<String>,
    pub threshold: Option<String>,
    pub expiry: Option<NaiveDate>,
    pub clear_expiry: bool,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub barcode: Option<String>,
    pub photo: Option<String>,
}

fn patched(current: Option<String>, change: Option<String>) -> Option<String> {
    match change {
        None => current,
        Some(value) if value.is_empty() => None,
        Some(value) => Some(value),
    }
}

fn patched_amount(current: Option<Amount>, change: Option<String>) -> Option<Amount> {
    match change {
        None => current,
        Some(value) if value.is_empty() => None,
        Some(value) => Some(Amount::from(value)),
    }
}

impl ItemPatch {
    pub fn apply(self, mut draft: ItemDraft) -> ItemDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(item_type) = self.item_type {
            draft.item_type = item_type;
        }
        if let Some(room) = self.room {
            draft.room = room.into();
        }
        draft.quantity = patched_amount(draft.quantity, self.quantity);
        draft.threshold = patched_amount(draft.threshold, self.threshold);
        if self.clear_expiry {
            draft.expiry = None;
        } else if let Some(expiry) = self.expiry {
            draft.expiry = Some(expiry);
        }
        draft.location = patched(draft.location, self.location);
        draft.notes = patched(draft.notes, self.notes);
        draft.barcode = patched(draft.barcode, self.barcode);
        draft.photo = patched(draft.photo, self.photo);
        draft
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.item_type.is_none()
            && self.room.is_none()
            && self.quantity.is_none()
            && self.threshold.is_none()
            && self.expiry.is_none()
            && !self.clear_expiry
            && self.location.is_none()
            && self.notes.is_none()
            && self.barcode.is_none()
            && self.photo.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_keeps_untouched_fields() {
        let draft = ItemDraft::new("Sel", ItemType::Food, Room::Cuisine)
            .with_quantity(3i64)
            .with_notes("gros sel");
        let patch = ItemPatch {
            name: Some("Sel fin".into()),
            ..ItemPatch::default()
        };
        let result = patch.apply(draft);
        assert_eq!(result.name, "Sel fin");
        assert_eq!(result.quantity.as_ref().and_then(Amount::parse), Some(3));
        assert_eq!(result.notes.as_deref(), Some("gros sel"));
    }

    #[test]
    fn empty_strings_clear_optional_fields() {
        let draft = ItemDraft::new("Sel", ItemType::Food, Room::Cuisine)
            .with_quantity("3")
            .with_location("placard")
            .with_expiry(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let patch = ItemPatch {
            quantity: Some(String::new()),
            location: Some(String::new()),
            clear_expiry: true,
            ..ItemPatch::default()
        };
        let result = patch.apply(draft);
        assert_eq!(result.quantity, None);
        assert_eq!(result.location, None);
        assert_eq!(result.expiry, None);
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(ItemPatch::default().is_empty());
        assert!(!ItemPatch {
            clear_expiry: true,
            ..ItemPatch::default()
        }
        .is_empty());
    }
}
