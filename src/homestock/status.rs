//! Freshness status of an item, derived from its type and expiry date.

use crate::model::{Item, ItemType, Status};
use chrono::NaiveDate;

/// Items expiring within this many days (inclusive) are `Expiring`.
pub const EXPIRING_WINDOW_DAYS: i64 = 7;

/// Whole calendar days from `today` to `expiry`; negative once it has passed.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

pub fn status_for(item_type: ItemType, expiry: Option<NaiveDate>, today: NaiveDate) -> Status {
    let expiry = match (item_type, expiry) {
        (ItemType::Food, Some(expiry)) => expiry,
        _ => return Status::Fresh,
    };

    match days_until(expiry, today) {
        d if d < 0 => Status::Expired,
        d if d <= EXPIRING_WINDOW_DAYS => Status::Expiring,
        _ => Status::Fresh,
    }
}

/// Status of `item` as of `today`, ignoring whatever status it currently carries.
pub fn compute_status(item: &Item, today: NaiveDate) -> Status {
    status_for(item.item_type, item.expiry, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDraft, ItemId, Room};
    use chrono::Days;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn food_expiring(expiry: NaiveDate) -> Item {
        let draft = ItemDraft::new("Lait", ItemType::Food, Room::Cuisine)
            .with_expiry(expiry);
        Item::from_draft(ItemId::from("1"), draft, Status::Fresh)
    }

    #[test]
    fn expiring_today_is_expiring_not_expired() {
        assert_eq!(
            compute_status(&food_expiring(today()), today()),
            Status::Expiring
        );
    }

    #[test]
    fn yesterday_is_expired() {
        let expiry = today() - Days::new(1);
        assert_eq!(
            compute_status(&food_expiring(expiry), today()),
            Status::Expired
        );
    }

    #[test]
    fn window_boundary() {
        let seven = today() + Days::new(7);
        let eight = today() + Days::new(8);
        assert_eq!(
            compute_status(&food_expiring(seven), today()),
            Status::Expiring
        );
        assert_eq!(
            compute_status(&food_expiring(eight), today()),
            Status::Fresh
        );
    }

    #[test]
    fn food_without_expiry_is_fresh() {
        assert_eq!(status_for(ItemType::Food, None, today()), Status::Fresh);
    }

    #[test]
    fn stored_status_is_ignored() {
        let mut item = food_expiring(today() + Days::new(30));
        item.status = Status::Expired;
        assert_eq!(compute_status(&item, today()), Status::Fresh);
    }

    proptest! {
        #[test]
        fn objects_are_always_fresh(offset in -400i64..400) {
            let expiry = today() + chrono::Duration::days(offset);
            prop_assert_eq!(status_for(ItemType::Object, Some(expiry), today()), Status::Fresh);
        }

        #[test]
        fn food_status_follows_day_difference(offset in -400i64..400) {
            let expiry = today() + chrono::Duration::days(offset);
            let expected = if offset < 0 {
                Status::Expired
            } else if offset <= EXPIRING_WINDOW_DAYS {
                Status::Expiring
            } else {
                Status::Fresh
            };
            prop_assert_eq!(status_for(ItemType::Food, Some(expiry), today()), expected);
        }
    }
}
