use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::store::DataStore;

/// Headline numbers plus the per room and type breakdown.
pub fn run<S: DataStore, C: Clock>(inventory: &InventoryStore<S, C>) -> Result<CmdResult> {
    Ok(CmdResult {
        summary: Some(inventory.summary()),
        stats: inventory.stats().into_iter().collect(),
        ..CmdResult::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::StatKey;
    use crate::model::{ItemType, Room, Status};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn reports_summary_and_buckets() {
        let inventory = StoreFixture::new()
            .with_stock("Ampoules", Room::Garage, "1", "2")
            .with_food("Jambon", Room::Cuisine, Status::Expired)
            .open();

        let result = run(&inventory).unwrap();
        let summary = result.summary.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.low_stock, 1);

        let keys: Vec<StatKey> = result.stats.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                StatKey::new(Room::Cuisine, ItemType::Food),
                StatKey::new(Room::Garage, ItemType::Object),
            ]
        );
        assert_eq!(result.stats[0].1.expired_count, 1);
        assert_eq!(result.stats[1].1.low_stock_count, 1);
    }
}
