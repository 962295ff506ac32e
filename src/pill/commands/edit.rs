use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use chrono::NaiveDate;

pub fn run(
    inventory: &mut Inventory,
    name: &str,
    quantity: i64,
    expiry: Option<NaiveDate>,
) -> Result<CmdResult> {
    let edited = inventory.edit(name, quantity, expiry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Edited item: {}", edited)));
    Ok(result)
}
