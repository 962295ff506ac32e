use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use chrono::NaiveDate;

pub fn run(inventory: &mut Inventory, name: &str, expiry: Option<NaiveDate>) -> Result<CmdResult> {
    let removed = inventory.delete(name, expiry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted the following item from the inventory: \n{}",
        removed
    )));
    Ok(result)
}
