use super::DataStore;
use crate::error::{HomestockError, Result};
use crate::model::Item;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    saves: usize,
    fail_saves: bool,
    fail_loads: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Make every following `save` fail, to exercise rollback paths.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Make `load` report unreadable data.
    pub fn fail_loads(&mut self, fail: bool) {
        self.fail_loads = fail;
    }

    pub fn saved_items(&self) -> &[Item] {
        &self.items
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Item>> {
        if self.fail_loads {
            return Err(HomestockError::Store("stored items are corrupt".to_string()));
        }
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        if self.fail_saves {
            return Err(HomestockError::Store("save refused".to_string()));
        }
        self.items = items.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::clock::FixedClock;
    use crate::inventory::InventoryStore;
    use crate::model::{ItemDraft, ItemId, ItemType, Room, Status};
    use chrono::NaiveDate;

    /// Date every fixture inventory treats as today.
    pub fn fixture_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap_or_default()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: usize,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        fn push(mut self, draft: ItemDraft, status: Status) -> Self {
            let item = Item::from_draft(ItemId::from(self.next_id.to_string()), draft, status);
            self.next_id += 1;
            self.store.items.push(item);
            self
        }

        pub fn with_object(self, name: &str, room: Room) -> Self {
            self.push(ItemDraft::new(name, ItemType::Object, room), Status::Fresh)
        }

        pub fn with_food(self, name: &str, room: Room, status: Status) -> Self {
            self.push(ItemDraft::new(name, ItemType::Food, room), status)
        }

        /// Opens an inventory over the fixture items, dated [`fixture_today`].
        pub fn open(self) -> InventoryStore<InMemoryStore, FixedClock> {
            InventoryStore::open(self.store, FixedClock(fixture_today()))
                .unwrap_or_else(|e| panic!("fixture store failed to open: {}", e))
        }

        pub fn with_stock(self, name: &str, room: Room, quantity: &str, threshold: &str) -> Self {
            self.push(
                ItemDraft::new(name, ItemType::Object, room)
                    .with_quantity(quantity)
                    .with_threshold(threshold),
                Status::Fresh,
            )
        }
    }
}
