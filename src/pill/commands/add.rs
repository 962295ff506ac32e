use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::{AddOutcome, Inventory};
use chrono::NaiveDate;

pub fn run(
    inventory: &mut Inventory,
    name: &str,
    quantity: i64,
    expiry: Option<NaiveDate>,
) -> Result<CmdResult> {
    let outcome = inventory.add(name, quantity, expiry)?;

    let message = match &outcome {
        AddOutcome::NewItem(item) => {
            format!("Added the following item to the inventory: \n{}", item)
        }
        AddOutcome::NewBatch(item) => {
            format!("Added new item with a different expiry date: \n{}", item)
        }
        AddOutcome::Merged(item) if expiry.is_some() => format!(
            "Item already exists with the same expiry date. Updated quantity: \n{}",
            item
        ),
        AddOutcome::Merged(item) => format!(
            "Item already exists with no expiry date. Updated quantity: \n{}",
            item
        ),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
