use crate::aggregate::group_by_room;
use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult, RoomGroup};
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::index::{index_of, DisplayItem};
use crate::inventory::InventoryStore;
use crate::model::Item;
use crate::store::DataStore;

/// Filtered items grouped by room, with search suggestions when the search
/// term is long enough.
pub fn run<S: DataStore, C: Clock>(
    inventory: &InventoryStore<S, C>,
    criteria: &FilterCriteria,
) -> Result<CmdResult> {
    let matching: Vec<Item> = inventory.filter(criteria).into_iter().cloned().collect();

    let groups: Vec<RoomGroup> = group_by_room(&matching)
        .into_iter()
        .map(|(room, items)| RoomGroup {
            room,
            items: items
                .into_iter()
                .filter_map(|item| {
                    index_of(inventory.items(), &item.id).map(|index| DisplayItem {
                        index,
                        item: item.clone(),
                    })
                })
                .collect(),
        })
        .collect();

    let suggestions = criteria
        .search_term
        .as_deref()
        .map(|term| inventory.suggestions(term))
        .unwrap_or_default();

    let mut result = CmdResult::default()
        .with_room_groups(groups)
        .with_suggestions(suggestions);
    if result.room_groups.is_empty() {
        result.add_message(CmdMessage::info("No items found."));
    }
    Ok(result)
}
