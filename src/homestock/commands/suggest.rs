use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::InventoryStore;
use crate::store::DataStore;

pub fn run<S: DataStore, C: Clock>(
    inventory: &InventoryStore<S, C>,
    term: &str,
) -> Result<CmdResult> {
    Ok(CmdResult::default().with_suggestions(inventory.suggestions(term)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Room;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn short_terms_suggest_nothing() {
        let inventory = StoreFixture::new()
            .with_object("Marteau", Room::Garage)
            .open();
        assert!(run(&inventory, "ma").unwrap().suggestions.is_empty());
        assert_eq!(
            run(&inventory, "mar").unwrap().suggestions,
            vec!["Marteau (🔧 Garage)"]
        );
    }
}
