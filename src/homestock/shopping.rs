//! Reorder list: every item at or below its threshold.

use crate::model::Item;
use crate::stock::is_low_stock;
use serde::Serialize;

/// A computed shopping list. An empty list means nothing needs reordering;
/// callers that have not computed one yet hold no `ShoppingList` at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    entries: Vec<Item>,
}

impl ShoppingList {
    pub fn entries(&self) -> &[Item] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn build_shopping_list(items: &[Item]) -> ShoppingList {
    ShoppingList {
        entries: items.iter().filter(|i| is_low_stock(i)).cloned().collect(),
    }
}
