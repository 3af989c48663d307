//! Multi-criteria filtering and search suggestions.
//!
//! Criteria combine with AND; the search term matches name, location or notes
//! case-insensitively. An absent or empty criterion matches everything.

use crate::model::{Item, ItemType, Room, RoomKey, Status};

/// Search terms must be longer than this before suggestions are offered.
pub const SUGGESTION_MIN_LEN: usize = 2;
pub const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub room: Option<Room>,
    pub item_type: Option<ItemType>,
    pub status: Option<Status>,
    pub search_term: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    fn normalized_term(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, item: &Item) -> bool {
        let term = self.normalized_term();
        self.matches_with_term(item, term.as_deref())
    }

    fn matches_with_term(&self, item: &Item, term: Option<&str>) -> bool {
        let room_ok = self
            .room
            .map_or(true, |room| item.room == RoomKey::Known(room));
        let type_ok = self.item_type.map_or(true, |t| item.item_type == t);
        let status_ok = self.status.map_or(true, |s| item.status == s);
        let search_ok = term.map_or(true, |term| matches_text(item, term));

        room_ok && type_ok && status_ok && search_ok
    }
}

/// `term` must already be lowercase.
fn matches_text(item: &Item, term: &str) -> bool {
    [
        Some(item.name.as_str()),
        item.location.as_deref(),
        item.notes.as_deref(),
    ]
    .into_iter()
    .map(|field| field.unwrap_or_default().to_lowercase())
    .any(|field| field.contains(term))
}

/// Items passing every criterion, in input order.
pub fn filter<'a>(items: &'a [Item], criteria: &FilterCriteria) -> Vec<&'a Item> {
    let term = criteria.normalized_term();
    items
        .iter()
        .filter(|item| criteria.matches_with_term(item, term.as_deref()))
        .collect()
}

/// Up to [`SUGGESTION_LIMIT`] `"<name> (<room label>)"` entries for items whose
/// text matches `term`. Other criteria do not apply. Terms of
/// [`SUGGESTION_MIN_LEN`] characters or fewer yield nothing.
pub fn suggestions(items: &[Item], term: &str) -> Vec<String> {
    if term.chars().count() <= SUGGESTION_MIN_LEN {
        return Vec::new();
    }
    let term = term.to_lowercase();

    items
        .iter()
        .filter(|item| matches_text(item, &term))
        .take(SUGGESTION_LIMIT)
        .map(|item| format!("{} ({})", item.name, item.room.label()))
        .collect()
}
