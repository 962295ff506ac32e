use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

use super::helpers::display_items;

pub fn run(inventory: &mut Inventory, name: &str, quantity: i64) -> Result<CmdResult> {
    let remaining = inventory.consume(name, quantity)?;
    let name = name.trim();

    let left = inventory.list_batches(name);
    let mut result = if left.is_empty() {
        CmdResult::default()
    } else {
        CmdResult::default()
            .with_heading("Remaining stock:")
            .with_listed_items(display_items(&left))
    };
    if remaining == 0 {
        result.add_message(CmdMessage::success(format!(
            "Used {} {}. No {} left in stock.",
            quantity, name, name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Used {} {}. {} left in stock.",
            quantity, name, remaining
        )));
    }
    Ok(result)
}
