use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;

use super::helpers::listing_result;

pub fn run(inventory: &Inventory, term: &str) -> Result<CmdResult> {
    let found = inventory.find(term);
    Ok(listing_result(found.list()))
}
