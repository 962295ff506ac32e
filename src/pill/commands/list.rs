use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;

use super::helpers::listing_result;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    Ok(listing_result(inventory.list()))
}
