//! Grouping and counting for the room, map and statistics views.
//!
//! Everything keyed by [`Room`] iterates in the canonical room order, no matter
//! how the items were ordered. Items whose room is not a known [`Room`] are
//! left out of room-keyed results.

use crate::model::{Item, ItemType, Room, Status};
use crate::status::compute_status;
use crate::stock::is_low_stock;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

fn warn_unrecognized(items: &[Item], view: &str) {
    let dropped = items
        .iter()
        .filter(|item| item.room.room().is_none())
        .count();
    if dropped > 0 {
        warn!(dropped, view, "skipping items with an unrecognized room");
    }
}

/// Items grouped by room. Rooms without items are absent.
pub fn group_by_room(items: &[Item]) -> BTreeMap<Room, Vec<&Item>> {
    warn_unrecognized(items, "rooms");
    let mut groups: BTreeMap<Room, Vec<&Item>> = BTreeMap::new();
    for item in items {
        if let Some(room) = item.room.room() {
            groups.entry(room).or_default().push(item);
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StatKey {
    pub room: Room,
    pub item_type: ItemType,
}

impl StatKey {
    pub fn new(room: Room, item_type: ItemType) -> Self {
        Self { room, item_type }
    }

    /// `"<room label> - <type label>"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.room.label(), self.item_type.label())
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.room, self.item_type)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatRecord {
    pub count: usize,
    pub low_stock_count: usize,
    pub expired_count: usize,
    pub expiring_count: usize,
}

/// Per room and type counts. Expired/expiring come from the stored status.
/// Combinations without items are absent.
pub fn room_type_stats(items: &[Item]) -> BTreeMap<StatKey, StatRecord> {
    warn_unrecognized(items, "stats");
    let mut stats: BTreeMap<StatKey, StatRecord> = BTreeMap::new();
    for item in items {
        let Some(room) = item.room.room() else {
            continue;
        };
        let record = stats.entry(StatKey::new(room, item.item_type)).or_default();
        record.count += 1;
        if is_low_stock(item) {
            record.low_stock_count += 1;
        }
        match item.status {
            Status::Expired => record.expired_count += 1,
            Status::Expiring => record.expiring_count += 1,
            Status::Fresh => {}
        }
    }
    stats
}

/// Item count for every known room, zero included.
pub fn count_by_room(items: &[Item]) -> BTreeMap<Room, usize> {
    warn_unrecognized(items, "map");
    let mut counts: BTreeMap<Room, usize> = Room::ALL.into_iter().map(|r| (r, 0)).collect();
    for item in items {
        if let Some(room) = item.room.room() {
            *counts.entry(room).or_default() += 1;
        }
    }
    counts
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub expiring_soon: usize,
    pub low_stock: usize,
}

/// Headline numbers. Expiring items are recounted against `today` rather than
/// read from the stored status, which may be stale.
pub fn summary(items: &[Item], today: NaiveDate) -> Summary {
    Summary {
        total: items.len(),
        expiring_soon: items
            .iter()
            .filter(|item| compute_status(item, today) == Status::Expiring)
            .count(),
        low_stock: items.iter().filter(|item| is_low_stock(item)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDraft, ItemId, RoomKey};
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn item(id: &str, draft: ItemDraft, status: Status) -> Item {
        Item::from_draft(ItemId::from(id), draft, status)
    }

    fn sample() -> Vec<Item> {
        vec![
            item(
                "1",
                ItemDraft::new("Vin", ItemType::Food, Room::Cave),
                Status::Fresh,
            ),
            item(
                "2",
                ItemDraft::new("Oeufs", ItemType::Food, Room::Cuisine)
                    .with_quantity("2")
                    .with_threshold("3"),
                Status::Expiring,
            ),
            item(
                "3",
                ItemDraft::new("Yaourt", ItemType::Food, Room::Cuisine),
                Status::Expired,
            ),
            item(
                "4",
                ItemDraft::new("Poêle", ItemType::Object, Room::Cuisine),
                Status::Fresh,
            ),
        ]
    }

    #[test]
    fn groups_follow_canonical_room_order() {
        let items = sample();
        let groups = group_by_room(&items);
        let rooms: Vec<Room> = groups.keys().copied().collect();
        assert_eq!(rooms, vec![Room::Cuisine, Room::Cave]);
        let cuisine: Vec<&str> = groups[&Room::Cuisine]
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(cuisine, vec!["Oeufs", "Yaourt", "Poêle"]);
    }

    #[test]
    fn groups_drop_unknown_rooms() {
        let mut items = sample();
        items[0].room = RoomKey::Unknown("grenier".into());
        let groups = group_by_room(&items);
        assert!(!groups.contains_key(&Room::Cave));
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), 3);
    }

    #[test]
    fn stats_are_sparse_and_counted_per_bucket() {
        let items = sample();
        let stats = room_type_stats(&items);
        assert_eq!(stats.len(), 3);

        let food = stats[&StatKey::new(Room::Cuisine, ItemType::Food)];
        assert_eq!(
            food,
            StatRecord {
                count: 2,
                low_stock_count: 1,
                expired_count: 1,
                expiring_count: 1,
            }
        );
        let garage_objects = StatKey::new(Room::Garage, ItemType::Object);
        assert!(!stats.contains_key(&garage_objects));
    }

    #[test]
    fn stats_skip_unknown_rooms() {
        let mut items = sample();
        items[0].room = RoomKey::Unknown("grenier".into());
        let stats = room_type_stats(&items);
        let cave_food = StatKey::new(Room::Cave, ItemType::Food);
        assert!(!stats.contains_key(&cave_food));
        assert_eq!(stats.values().map(|r| r.count).sum::<usize>(), 3);
    }

    #[test]
    fn stat_key_formats_like_storage_keys() {
        let key = StatKey::new(Room::SalleBain, ItemType::Object);
        assert_eq!(key.to_string(), "salle-bain-objects");
        assert_eq!(key.label(), "🛁 Salle de bain - 🏠 Objets");
    }

    #[test]
    fn count_by_room_lists_every_room() {
        let counts = count_by_room(&sample());
        assert_eq!(counts.len(), Room::ALL.len());
        assert_eq!(counts[&Room::Cuisine], 3);
        assert_eq!(counts[&Room::Cave], 1);
        assert_eq!(counts[&Room::Bureau], 0);

        let empty = count_by_room(&[]);
        assert!(empty.values().all(|c| *c == 0));
        assert_eq!(empty.len(), 7);
    }

    #[test]
    fn count_by_room_skips_unknown_rooms() {
        let mut items = sample();
        items[0].room = RoomKey::Unknown("grenier".into());
        let counts = count_by_room(&items);
        assert_eq!(counts.len(), Room::ALL.len());
        assert_eq!(counts[&Room::Cave], 0);
        assert_eq!(counts.values().sum::<usize>(), 3);
    }

    #[test]
    fn summary_recomputes_expiring_status() {
        // Stored as fresh but now within the window.
        let items = vec![item(
            "1",
            ItemDraft::new("Fromage", ItemType::Food, Room::Cuisine)
                .with_expiry(today() + Days::new(3))
                .with_quantity(1i64)
                .with_threshold(1i64),
            Status::Fresh,
        )];
        assert_eq!(
            summary(&items, today()),
            Summary {
                total: 1,
                expiring_soon: 1,
                low_stock: 1,
            }
        );
    }
}
