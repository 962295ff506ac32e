use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::transactions::TransactionLog;

pub fn run(log: &TransactionLog) -> Result<CmdResult> {
    if log.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No transactions recorded yet."));
        return Ok(result);
    }

    Ok(CmdResult::default()
        .with_heading("Listing all transactions:")
        .with_transactions(log.entries()))
}
