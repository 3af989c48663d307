//! Low-stock detection.

use crate::model::{Amount, Item};

fn parsed(amount: Option<&Amount>) -> Option<i64> {
    amount.and_then(Amount::parse)
}

/// Quantity and threshold as integers, when both parse.
pub fn stock_levels(item: &Item) -> Option<(i64, i64)> {
    Some((
        parsed(item.quantity.as_ref())?,
        parsed(item.threshold.as_ref())?,
    ))
}

/// `quantity <= threshold`. Items with an unknown quantity or threshold are
/// never low on stock.
pub fn is_low_stock(item: &Item) -> bool {
    matches!(stock_levels(item), Some((quantity, threshold)) if quantity <= threshold)
}
