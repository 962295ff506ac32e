use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Expiry of a batch.
///
/// Variant order is the sort order: every dated batch comes before a batch
/// that never expires, so undated stock is always listed last for a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expiry {
    On(NaiveDate),
    Never,
}

impl Expiry {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Expiry::On(date) => Some(*date),
            Expiry::Never => None,
        }
    }

    pub fn is_before(&self, cutoff: NaiveDate) -> bool {
        matches!(self, Expiry::On(date) if *date < cutoff)
    }
}

impl From<Option<NaiveDate>> for Expiry {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Expiry::Never, Expiry::On)
    }
}

impl From<NaiveDate> for Expiry {
    fn from(date: NaiveDate) -> Self {
        Expiry::On(date)
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiry::On(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Expiry::Never => write!(f, "no expiry"),
        }
    }
}

/// One stocked batch of a named item.
///
/// `name` and `expiry` form the identity of a batch; only `quantity` changes
/// while the batch is held by an [`Inventory`](crate::inventory::Inventory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    quantity: i64,
    expiry: Expiry,
}

impl Item {
    pub(crate) fn new(name: impl Into<String>, quantity: i64, expiry: Expiry) -> Self {
        Self {
            name: name.into(),
            quantity,
            expiry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn expiry(&self) -> Expiry {
        self.expiry
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry.date()
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            name: self.name.clone(),
            quantity: self.quantity,
            expiry_date: self.expiry_date(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} in stock", self.name, self.quantity)?;
        if let Expiry::On(date) = self.expiry {
            write!(f, ", expiring: {}", date.format(DATE_FORMAT))?;
        }
        Ok(())
    }
}

/// Flat persisted form of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, quantity: i64, expiry_date: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            quantity,
            expiry_date,
        }
    }
}

/// Parses an ISO `YYYY-MM-DD` date as typed on the command line.
pub fn parse_date(input: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", input))
}
