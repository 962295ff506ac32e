use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::DATE_FORMAT;
use chrono::NaiveDate;

use super::helpers::display_items;

/// Lists batches expiring strictly before `cutoff`. When `cutoff` is `today`
/// the listing is worded as already expired stock.
pub fn run(inventory: &Inventory, cutoff: NaiveDate, today: NaiveDate) -> Result<CmdResult> {
    let expiring = inventory.expiring_before(cutoff);
    let listing = expiring.list();
    let already_expired = cutoff == today;
    let cutoff_str = cutoff.format(DATE_FORMAT);

    if listing.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(if already_expired {
            "There are no items that have expired.".to_string()
        } else {
            format!("There are no items expiring before {}.", cutoff_str)
        }));
        return Ok(result);
    }

    let heading = if already_expired {
        "Listing all items that have expired".to_string()
    } else {
        format!("Listing all items expiring before {}", cutoff_str)
    };
    Ok(CmdResult::default()
        .with_heading(heading)
        .with_listed_items(display_items(listing.items())))
}
