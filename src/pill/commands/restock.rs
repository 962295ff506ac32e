use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

use super::helpers::display_items;

pub fn run(inventory: &Inventory, threshold: i64) -> Result<CmdResult> {
    let low = inventory.to_restock(threshold)?;

    if low.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "There are no items with quantity at or below {}.",
            threshold
        )));
        return Ok(result);
    }

    Ok(CmdResult::default()
        .with_heading(format!(
            "Listing all items that need to be restocked (at or below {}):",
            threshold
        ))
        .with_listed_items(display_items(&low)))
}
