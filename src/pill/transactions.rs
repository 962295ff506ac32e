//! # Transaction Log
//!
//! Every successful mutation of an [`Inventory`](crate::inventory::Inventory)
//! produces one [`Transaction`]. The store hands it to whatever
//! [`InventoryObserver`] it was built with and moves on; recording can never
//! fail or undo the mutation.
//!
//! [`TransactionLog`] is the observer used by the API. It is a cheap handle
//! over a shared list, so the API keeps one clone for listing and persistence
//! while the inventory owns another.

use crate::inventory::InventoryObserver;
use crate::model::DATE_FORMAT;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Add,
    Delete,
    Edit,
    Use,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Add => "ADD",
            TransactionKind::Delete => "DELETE",
            TransactionKind::Edit => "EDIT",
            TransactionKind::Use => "USE",
        };
        f.write_str(label)
    }
}

/// Audit record of one mutation.
///
/// `quantity` is the amount added or consumed for `Add`/`Use`, the new
/// absolute value for `Edit`, and the removed batch's quantity for `Delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub name: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        name: impl Into<String>,
        quantity: i64,
        expiry_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            quantity,
            expiry_date,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.quantity, self.name)?;
        if let Some(date) = self.expiry_date {
            write!(f, " (expiring {})", date.format(DATE_FORMAT))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: Rc<RefCell<Vec<Transaction>>>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, transaction: Transaction) {
        self.entries.borrow_mut().push(transaction);
    }

    /// Copy of all records in emission order.
    pub fn entries(&self) -> Vec<Transaction> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl From<Vec<Transaction>> for TransactionLog {
    fn from(entries: Vec<Transaction>) -> Self {
        Self {
            entries: Rc::new(RefCell::new(entries)),
        }
    }
}

impl InventoryObserver for TransactionLog {
    fn record(&mut self, transaction: Transaction) {
        self.push(transaction);
    }
}
