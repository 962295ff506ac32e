use crate::commands::{CmdMessage, CmdResult, DisplayItem};
use crate::inventory::{IndexedItem, Listing};

pub const EMPTY_INVENTORY: &str = "The inventory is empty.";

pub fn display_items(items: &[IndexedItem<'_>]) -> Vec<DisplayItem> {
    items
        .iter()
        .map(|entry| DisplayItem {
            index: entry.index,
            item: entry.item.clone(),
        })
        .collect()
}

/// Shared rendering of a full listing: a heading plus the numbered batches,
/// or the empty-inventory message.
pub fn listing_result(listing: Listing<'_>) -> CmdResult {
    match listing {
        Listing::Empty => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(EMPTY_INVENTORY));
            result
        }
        Listing::Items(items) => CmdResult::default()
            .with_heading("Listing all items:")
            .with_listed_items(display_items(&items)),
    }
}
