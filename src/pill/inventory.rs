//! # Inventory Store
//!
//! [`Inventory`] owns every stocked batch. Batches are grouped under their
//! item name; names keep the order in which they were first stocked, and the
//! batches of one name are kept sorted by [`Expiry`] (dated first, earliest
//! first, undated last).
//!
//! ## Invariants
//!
//! - At most one batch per `(name, expiry)`; adding to an existing key merges
//!   by summing quantities.
//! - Every held batch has a quantity above zero. A batch that runs out is
//!   removed, and a name with no batches left is removed with it.
//! - Names are never blank.
//!
//! Every operation either succeeds completely or returns an error and leaves
//! the store untouched.
//!
//! ## Queries
//!
//! [`Inventory::list`] and [`Inventory::to_restock`] borrow from the store.
//! [`Inventory::find`] and [`Inventory::expiring_before`] build a new,
//! independent `Inventory` through the silent-add path, so their results can
//! be listed the same way as the store itself.
//!
//! ## Audit trail
//!
//! Successful `add`, `delete`, `edit` and `consume` calls hand a
//! [`Transaction`] to the injected [`InventoryObserver`]. Silent adds and
//! queries never do.

use crate::error::{PillError, Result};
use crate::model::{Expiry, Item, ItemRecord};
use crate::transactions::{Transaction, TransactionKind};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Receives one [`Transaction`] per successful mutation.
pub trait InventoryObserver {
    fn record(&mut self, transaction: Transaction);
}

impl<F: FnMut(Transaction)> InventoryObserver for F {
    fn record(&mut self, transaction: Transaction) {
        self(transaction)
    }
}

/// What an add did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// First batch stocked under this name.
    NewItem(Item),
    /// New expiry for a name that was already stocked.
    NewBatch(Item),
    /// Quantity merged into an existing batch; holds the merged batch.
    Merged(Item),
}

impl AddOutcome {
    pub fn item(&self) -> &Item {
        match self {
            AddOutcome::NewItem(item) | AddOutcome::NewBatch(item) | AddOutcome::Merged(item) => {
                item
            }
        }
    }
}

/// A batch together with its 1-based position in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedItem<'a> {
    pub index: usize,
    pub item: &'a Item,
}

/// Result of [`Inventory::list`].
///
/// An empty store is reported as [`Listing::Empty`] rather than as an empty
/// `Items`, so callers can word that case on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    Empty,
    Items(Vec<IndexedItem<'a>>),
}

impl<'a> Listing<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn items(&self) -> &[IndexedItem<'a>] {
        match self {
            Listing::Empty => &[],
            Listing::Items(items) => items,
        }
    }
}

#[derive(Default)]
pub struct Inventory {
    names: Vec<String>,
    batches: HashMap<String, Vec<Item>>,
    observer: Option<Box<dyn InventoryObserver>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(mut self, observer: impl InventoryObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Rebuilds a store from persisted records.
    ///
    /// Records go through the same merge as [`Inventory::add_silent`], so
    /// their order does not affect the resulting quantities. The first invalid
    /// record aborts the restore.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = ItemRecord>,
    {
        let mut inventory = Self::new();
        for record in records {
            inventory.add_silent(&record.name, record.quantity, record.expiry_date)?;
        }
        Ok(inventory)
    }

    /// All batches as flat records, in listing order.
    pub fn snapshot(&self) -> Vec<ItemRecord> {
        self.iter().map(Item::to_record).collect()
    }

    pub fn add(
        &mut self,
        name: &str,
        quantity: i64,
        expiry: impl Into<Expiry>,
    ) -> Result<AddOutcome> {
        let expiry = expiry.into();
        let outcome = self.merge(name, quantity, expiry).map_err(|err| {
            warn!(name, quantity, %expiry, error = %err, "rejected add");
            err
        })?;

        info!(item = %outcome.item(), added = quantity, "added stock");
        self.notify(TransactionKind::Add, outcome.item().name(), quantity, expiry);
        Ok(outcome)
    }

    /// Same merge as [`Inventory::add`] without logging at info level or
    /// emitting a transaction. Used to populate derived stores.
    pub fn add_silent(
        &mut self,
        name: &str,
        quantity: i64,
        expiry: impl Into<Expiry>,
    ) -> Result<()> {
        let expiry = expiry.into();
        match self.merge(name, quantity, expiry) {
            Ok(outcome) => {
                debug!(item = %outcome.item(), "silently stored batch");
                Ok(())
            }
            Err(err) => {
                debug!(name, quantity, error = %err, "rejected silent add");
                Err(err)
            }
        }
    }

    /// Removes the batch matching `(name, expiry)` exactly, whatever its
    /// quantity. `Expiry::Never` only matches the undated batch.
    pub fn delete(&mut self, name: &str, expiry: impl Into<Expiry>) -> Result<Item> {
        let expiry = expiry.into();
        let removed = self.remove(name, expiry).map_err(|err| {
            warn!(name, %expiry, error = %err, "rejected delete");
            err
        })?;

        info!(item = %removed, "deleted batch");
        self.notify(TransactionKind::Delete, removed.name(), removed.quantity(), expiry);
        Ok(removed)
    }

    /// Sets the quantity of the batch matching `(name, expiry)` to exactly
    /// `quantity`.
    pub fn edit(&mut self, name: &str, quantity: i64, expiry: impl Into<Expiry>) -> Result<Item> {
        let expiry = expiry.into();
        let edited = self.overwrite(name, quantity, expiry).map_err(|err| {
            warn!(name, quantity, %expiry, error = %err, "rejected edit");
            err
        })?;

        info!(item = %edited, "edited batch");
        self.notify(TransactionKind::Edit, edited.name(), quantity, expiry);
        Ok(edited)
    }

    /// Takes `quantity` units of `name`, earliest expiry first, and returns
    /// the stock left for that name. Batches that reach zero are removed.
    pub fn consume(&mut self, name: &str, quantity: i64) -> Result<i64> {
        let remaining = self.take_stock(name, quantity).map_err(|err| {
            warn!(name, quantity, error = %err, "rejected use");
            err
        })?;

        let name = name.trim();
        info!(name, used = quantity, remaining, "used stock");
        self.notify(TransactionKind::Use, name, quantity, Expiry::Never);
        Ok(remaining)
    }

    /// Every batch in listing order, numbered from 1.
    pub fn list(&self) -> Listing<'_> {
        if self.is_empty() {
            debug!("listing requested on an empty inventory");
            return Listing::Empty;
        }
        Listing::Items(number(self.iter()))
    }

    /// Case-insensitive substring search over item names. Every batch of a
    /// matching name is copied into the result.
    pub fn find(&self, term: &str) -> Inventory {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            warn!("find called with an empty search term");
            return Inventory::new();
        }

        let found = Inventory::collect(
            self.names
                .iter()
                .filter(|name| name.to_lowercase().contains(&needle))
                .flat_map(|name| self.get(name)),
        );
        debug!(term, matches = found.name_count(), "searched inventory");
        found
    }

    /// Batches with an expiry date strictly before `cutoff`. Undated batches
    /// are never included.
    pub fn expiring_before(&self, cutoff: NaiveDate) -> Inventory {
        let expiring =
            Inventory::collect(self.iter().filter(|item| item.expiry().is_before(cutoff)));
        debug!(%cutoff, batches = expiring.size(), "collected expiring batches");
        expiring
    }

    /// Batches whose quantity is at most `threshold`, numbered from 1 in
    /// listing order.
    pub fn to_restock(&self, threshold: i64) -> Result<Vec<IndexedItem<'_>>> {
        if threshold < 0 {
            warn!(threshold, "rejected restock query");
            return Err(PillError::invalid(format!(
                "Restock threshold cannot be negative, got {}",
                threshold
            )));
        }
        Ok(number(self.iter().filter(|item| item.quantity() <= threshold)))
    }

    /// Batches of `name` in expiry order, numbered from 1.
    pub fn list_batches(&self, name: &str) -> Vec<IndexedItem<'_>> {
        number(self.get(name).iter())
    }

    /// Batches of `name` in expiry order; empty when the name is not stocked.
    pub fn get(&self, name: &str) -> &[Item] {
        self.batches
            .get(name.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.names.iter().flat_map(move |name| self.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Number of batches, not names.
    pub fn size(&self) -> usize {
        self.batches.values().map(Vec::len).sum()
    }

    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn collect<'a>(items: impl IntoIterator<Item = &'a Item>) -> Inventory {
        let mut derived = Inventory::new();
        for item in items {
            if let Err(err) = derived.add_silent(item.name(), item.quantity(), item.expiry()) {
                warn!(item = %item, error = %err, "skipped batch while building derived inventory");
            }
        }
        derived
    }

    fn merge(&mut self, name: &str, quantity: i64, expiry: Expiry) -> Result<AddOutcome> {
        let name = validate_name(name)?;
        validate_quantity(quantity)?;

        match self.batches.get_mut(name) {
            Some(batches) => match batches.binary_search_by_key(&expiry, |b| b.expiry()) {
                Ok(pos) => {
                    let batch = &mut batches[pos];
                    let total = batch.quantity().checked_add(quantity).ok_or_else(|| {
                        PillError::invalid(format!(
                            "Quantity of {} would overflow",
                            describe(name, expiry)
                        ))
                    })?;
                    batch.set_quantity(total);
                    Ok(AddOutcome::Merged(batch.clone()))
                }
                Err(pos) => {
                    let item = Item::new(name, quantity, expiry);
                    batches.insert(pos, item.clone());
                    Ok(AddOutcome::NewBatch(item))
                }
            },
            None => {
                let item = Item::new(name, quantity, expiry);
                self.names.push(name.to_string());
                self.batches.insert(name.to_string(), vec![item.clone()]);
                Ok(AddOutcome::NewItem(item))
            }
        }
    }

    fn remove(&mut self, name: &str, expiry: Expiry) -> Result<Item> {
        let name = validate_name(name)?;
        let not_found = || PillError::not_found(describe(name, expiry));

        let batches = self.batches.get_mut(name).ok_or_else(not_found)?;
        let pos = batches
            .binary_search_by_key(&expiry, |b| b.expiry())
            .map_err(|_| not_found())?;
        let removed = batches.remove(pos);
        if batches.is_empty() {
            self.drop_name(name);
        }
        Ok(removed)
    }

    fn overwrite(&mut self, name: &str, quantity: i64, expiry: Expiry) -> Result<Item> {
        let name = validate_name(name)?;
        validate_quantity(quantity)?;

        let batch = self
            .batches
            .get_mut(name)
            .and_then(|batches| {
                let pos = batches.binary_search_by_key(&expiry, |b| b.expiry()).ok()?;
                batches.get_mut(pos)
            })
            .ok_or_else(|| PillError::not_found(describe(name, expiry)))?;
        batch.set_quantity(quantity);
        Ok(batch.clone())
    }

    fn take_stock(&mut self, name: &str, quantity: i64) -> Result<i64> {
        let name = validate_name(name)?;
        validate_quantity(quantity)?;

        let batches = self
            .batches
            .get_mut(name)
            .ok_or_else(|| PillError::not_found(name))?;
        let available: i128 = batches.iter().map(|b| i128::from(b.quantity())).sum();
        if available < i128::from(quantity) {
            return Err(PillError::invalid(format!(
                "Not enough {} in stock: requested {}, available {}",
                name, quantity, available
            )));
        }
        let remaining = i64::try_from(available - i128::from(quantity)).map_err(|_| {
            PillError::invalid(format!("Remaining stock of {} would overflow", name))
        })?;

        let mut outstanding = quantity;
        batches.retain_mut(|batch| {
            let taken = outstanding.min(batch.quantity());
            batch.set_quantity(batch.quantity() - taken);
            outstanding -= taken;
            batch.quantity() > 0
        });
        if batches.is_empty() {
            self.drop_name(name);
        }
        Ok(remaining)
    }

    fn drop_name(&mut self, name: &str) {
        self.batches.remove(name);
        self.names.retain(|n| n != name);
    }

    fn notify(&mut self, kind: TransactionKind, name: &str, quantity: i64, expiry: Expiry) {
        if let Some(observer) = self.observer.as_mut() {
            observer.record(Transaction::new(kind, name, quantity, expiry.date()));
        }
    }
}

/// Equal when both hold the same names mapped to the same batches. The order
/// in which names were stocked is not compared.
impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        self.batches == other.batches
    }
}

impl Eq for Inventory {}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inventory")
            .field("names", &self.names)
            .field("batches", &self.batches)
            .finish_non_exhaustive()
    }
}

fn number<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<IndexedItem<'a>> {
    items
        .enumerate()
        .map(|(i, item)| IndexedItem { index: i + 1, item })
        .collect()
}

fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PillError::invalid("Item name cannot be empty"));
    }
    Ok(trimmed)
}

fn validate_quantity(quantity: i64) -> Result<()> {
    if quantity <= 0 {
        return Err(PillError::invalid(format!(
            "Quantity must be positive, got {}",
            quantity
        )));
    }
    Ok(())
}

fn describe(name: &str, expiry: Expiry) -> String {
    match expiry {
        Expiry::On(date) => format!("{} (expiring {})", name, date),
        Expiry::Never => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;
    use crate::transactions::TransactionLog;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn quantities(inventory: &Inventory, name: &str) -> Vec<(Option<NaiveDate>, i64)> {
        inventory
            .get(name)
            .iter()
            .map(|b| (b.expiry_date(), b.quantity()))
            .collect()
    }

    #[test]
    fn add_creates_then_merges() {
        let mut inv = Inventory::new();
        let first = inv.add("Bandage", 10, Expiry::Never).unwrap();
        assert!(matches!(first, AddOutcome::NewItem(_)));

        let second = inv.add("Bandage", 10, Expiry::Never).unwrap();
        assert!(matches!(second, AddOutcome::Merged(ref item) if item.quantity() == 20));

        assert_eq!(inv.size(), 1);
        assert_eq!(quantities(&inv, "Bandage"), vec![(None, 20)]);
    }

    #[test]
    fn add_with_new_expiry_creates_batch_in_order() {
        let mut inv = Inventory::new();
        inv.add("Syringe", 5, Expiry::Never).unwrap();
        inv.add("Syringe", 3, date("2025-06-01")).unwrap();
        let outcome = inv.add("Syringe", 2, date("2024-12-01")).unwrap();
        assert!(matches!(outcome, AddOutcome::NewBatch(_)));

        assert_eq!(
            quantities(&inv, "Syringe"),
            vec![
                (Some(date("2024-12-01")), 2),
                (Some(date("2025-06-01")), 3),
                (None, 5),
            ]
        );
        assert_eq!(inv.size(), 3);
        assert_eq!(inv.name_count(), 1);
    }

    #[test]
    fn add_rejects_blank_name_and_non_positive_quantity() {
        let mut inv = Inventory::new();
        inv.add("Gauze", 1, Expiry::Never).unwrap();

        for (name, qty) in [("", 5), ("   ", 5), ("Gauze", 0), ("Gauze", -3)] {
            let err = inv.add(name, qty, Expiry::Never).unwrap_err();
            assert!(matches!(err, PillError::InvalidArgument(_)));
        }
        assert_eq!(quantities(&inv, "Gauze"), vec![(None, 1)]);
    }

    #[test]
    fn add_rejects_overflowing_merge() {
        let mut inv = Inventory::new();
        inv.add("Gauze", i64::MAX, Expiry::Never).unwrap();
        let err = inv.add("Gauze", 1, Expiry::Never).unwrap_err();
        assert!(matches!(err, PillError::InvalidArgument(_)));
        assert_eq!(quantities(&inv, "Gauze"), vec![(None, i64::MAX)]);
    }

    #[test]
    fn names_are_trimmed() {
        let mut inv = Inventory::new();
        inv.add("  Bandage ", 4, Expiry::Never).unwrap();
        inv.add("Bandage", 1, Expiry::Never).unwrap();
        assert_eq!(inv.names().collect::<Vec<_>>(), vec!["Bandage"]);
        assert_eq!(quantities(&inv, "Bandage"), vec![(None, 5)]);
    }

    #[test]
    fn silent_add_validates_and_emits_nothing() {
        let log = TransactionLog::new();
        let mut inv = Inventory::new().with_observer(log.clone());

        inv.add_silent("Bandage", 2, Expiry::Never).unwrap();
        assert!(inv.add_silent("", 2, Expiry::Never).is_err());
        assert!(inv.add_silent("Bandage", 0, Expiry::Never).is_err());

        assert_eq!(inv.size(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn delete_matches_expiry_exactly() {
        let mut inv = Inventory::new();
        inv.add("Syringe", 5, date("2024-12-01")).unwrap();

        let err = inv.delete("Syringe", Expiry::Never).unwrap_err();
        assert!(matches!(err, PillError::NotFound(_)));
        assert_eq!(inv.size(), 1);

        let removed = inv.delete("Syringe", date("2024-12-01")).unwrap();
        assert_eq!(removed.quantity(), 5);
        assert!(inv.get("Syringe").is_empty());
    }

    #[test]
    fn deleting_last_batch_drops_the_name() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();
        inv.add("Syringe", 10, Expiry::Never).unwrap();
        inv.add("Syringe", 4, date("2024-12-01")).unwrap();

        inv.delete("Syringe", Expiry::Never).unwrap();
        assert_eq!(inv.name_count(), 2);
        inv.delete("Syringe", date("2024-12-01")).unwrap();

        assert_eq!(inv.name_count(), 1);
        assert_eq!(inv.size(), 1);
        assert_eq!(inv.names().collect::<Vec<_>>(), vec!["Bandage"]);
    }

    #[test]
    fn delete_unknown_name_is_not_found() {
        let mut inv = Inventory::new();
        assert!(matches!(
            inv.delete("Ghost", Expiry::Never).unwrap_err(),
            PillError::NotFound(_)
        ));
        assert!(matches!(
            inv.delete(" ", Expiry::Never).unwrap_err(),
            PillError::InvalidArgument(_)
        ));
    }

    #[test]
    fn edit_overwrites_quantity() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();
        inv.add("Syringe", 10, Expiry::Never).unwrap();

        let edited = inv.edit("Bandage", 3, Expiry::Never).unwrap();
        assert_eq!(edited.quantity(), 3);
        assert_eq!(quantities(&inv, "Bandage"), vec![(None, 3)]);
        assert_eq!(quantities(&inv, "Syringe"), vec![(None, 10)]);
    }

    #[test]
    fn edit_failures_leave_store_unchanged() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();

        assert!(matches!(
            inv.edit("Bandage", 0, Expiry::Never).unwrap_err(),
            PillError::InvalidArgument(_)
        ));
        assert!(matches!(
            inv.edit("Bandage", 5, date("2024-01-01")).unwrap_err(),
            PillError::NotFound(_)
        ));
        assert!(matches!(
            inv.edit("Gauze", 5, Expiry::Never).unwrap_err(),
            PillError::NotFound(_)
        ));
        assert_eq!(quantities(&inv, "Bandage"), vec![(None, 20)]);
    }

    #[test]
    fn consume_uses_earliest_expiry_first() {
        let mut inv = Inventory::new();
        inv.add("Syringe", 5, Expiry::Never).unwrap();
        inv.add("Syringe", 3, date("2024-12-01")).unwrap();
        inv.add("Syringe", 4, date("2025-01-01")).unwrap();

        let remaining = inv.consume("Syringe", 5).unwrap();
        assert_eq!(remaining, 7);
        assert_eq!(
            quantities(&inv, "Syringe"),
            vec![(Some(date("2025-01-01")), 2), (None, 5)]
        );
    }

    #[test]
    fn consume_everything_removes_the_name() {
        let mut inv = Inventory::new();
        inv.add("Gauze", 2, Expiry::Never).unwrap();
        inv.add("Gauze", 3, date("2024-12-01")).unwrap();

        assert_eq!(inv.consume("Gauze", 5).unwrap(), 0);
        assert!(inv.is_empty());
        assert_eq!(inv.size(), 0);
    }

    #[test]
    fn consume_more_than_available_fails_closed() {
        let mut inv = Inventory::new();
        inv.add("Gauze", 2, Expiry::Never).unwrap();

        assert!(matches!(
            inv.consume("Gauze", 3).unwrap_err(),
            PillError::InvalidArgument(_)
        ));
        assert!(matches!(
            inv.consume("Gauze", 0).unwrap_err(),
            PillError::InvalidArgument(_)
        ));
        assert!(matches!(
            inv.consume("Tape", 1).unwrap_err(),
            PillError::NotFound(_)
        ));
        assert_eq!(quantities(&inv, "Gauze"), vec![(None, 2)]);
    }

    #[test]
    fn consume_counts_stock_beyond_i64_range() {
        let mut inv = Inventory::new();
        inv.add("Saline", i64::MAX, date("2024-01-01")).unwrap();
        inv.add("Saline", 5, Expiry::Never).unwrap();

        assert_eq!(inv.consume("Saline", i64::MAX).unwrap(), 5);
        assert_eq!(quantities(&inv, "Saline"), vec![(None, 5)]);
    }

    #[test]
    fn consume_rejects_remaining_stock_that_overflows() {
        let mut inv = Inventory::new();
        inv.add("Saline", i64::MAX, date("2024-01-01")).unwrap();
        inv.add("Saline", i64::MAX, Expiry::Never).unwrap();

        assert!(matches!(
            inv.consume("Saline", 1).unwrap_err(),
            PillError::InvalidArgument(_)
        ));
        assert_eq!(
            quantities(&inv, "Saline"),
            vec![(Some(date("2024-01-01")), i64::MAX), (None, i64::MAX)]
        );
    }

    #[test]
    fn list_empty_is_distinct_signal() {
        let inv = Inventory::new();
        assert_eq!(inv.list(), Listing::Empty);
        assert!(inv.list().items().is_empty());
    }

    #[test]
    fn list_follows_insertion_then_expiry_order() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();
        inv.add("Syringe", 10, Expiry::Never).unwrap();
        inv.add("Bandage", 1, date("2024-01-01")).unwrap();

        let listing = inv.list();
        let lines: Vec<_> = listing
            .items()
            .iter()
            .map(|e| (e.index, e.item.to_string()))
            .collect();
        assert_eq!(
            lines,
            vec![
                (1, "Bandage: 1 in stock, expiring: 2024-01-01".to_string()),
                (2, "Bandage: 20 in stock".to_string()),
                (3, "Syringe: 10 in stock".to_string()),
            ]
        );
    }

    #[test]
    fn find_is_case_insensitive_substring_on_names() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();
        inv.add("Syringe", 10, Expiry::Never).unwrap();
        inv.add("Band-aid", 5, Expiry::Never).unwrap();
        inv.add("Bandage", 7, date("2025-02-01")).unwrap();

        let found = inv.find("band");
        assert_eq!(found.names().collect::<Vec<_>>(), vec!["Bandage", "Band-aid"]);
        assert_eq!(
            quantities(&found, "Bandage"),
            vec![(Some(date("2025-02-01")), 7), (None, 20)]
        );
        assert_eq!(quantities(&found, "Band-aid"), vec![(None, 5)]);
        assert!(found.get("Syringe").is_empty());
    }

    #[test]
    fn find_results_are_independent_copies() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();

        let mut found = inv.find("BANDAGE");
        found.edit("Bandage", 1, Expiry::Never).unwrap();
        assert_eq!(quantities(&inv, "Bandage"), vec![(None, 20)]);
    }

    #[test]
    fn find_without_matches_lists_as_empty() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();
        assert!(inv.find("abc").list().is_empty());
        assert!(inv.find("  ").is_empty());
    }

    #[test]
    fn expiring_before_is_strict_and_skips_undated() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();
        inv.add("Bandage", 2, date("2024-05-01")).unwrap();
        inv.add("Syringe", 4, date("2024-06-01")).unwrap();
        inv.add("Gauze", 9, date("2024-04-30")).unwrap();

        let expiring = inv.expiring_before(date("2024-06-01"));
        assert_eq!(expiring.size(), 2);
        assert_eq!(
            quantities(&expiring, "Bandage"),
            vec![(Some(date("2024-05-01")), 2)]
        );
        assert_eq!(
            quantities(&expiring, "Gauze"),
            vec![(Some(date("2024-04-30")), 9)]
        );
        assert!(expiring.get("Syringe").is_empty());
    }

    #[test]
    fn to_restock_is_inclusive_and_flattened() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();
        inv.add("Syringe", 10, Expiry::Never).unwrap();
        inv.add("Gauze", 15, Expiry::Never).unwrap();

        let restock = inv.to_restock(15).unwrap();
        let lines: Vec<_> = restock
            .iter()
            .map(|e| (e.index, e.item.name(), e.item.quantity()))
            .collect();
        assert_eq!(lines, vec![(1, "Syringe", 10), (2, "Gauze", 15)]);
    }

    #[test]
    fn to_restock_rejects_negative_threshold() {
        let inv = Inventory::new();
        assert!(matches!(
            inv.to_restock(-1).unwrap_err(),
            PillError::InvalidArgument(_)
        ));
        assert!(inv.to_restock(0).unwrap().is_empty());
    }

    #[test]
    fn get_unknown_name_is_empty_slice() {
        let inv = Inventory::new();
        assert!(inv.get("Nothing").is_empty());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut a = Inventory::new();
        a.add("Bandage", 20, Expiry::Never).unwrap();
        a.add("Syringe", 10, Expiry::Never).unwrap();

        let mut b = Inventory::new();
        b.add("Syringe", 10, Expiry::Never).unwrap();
        b.add("Bandage", 20, Expiry::Never).unwrap();
        assert_eq!(a, b);

        b.edit("Syringe", 11, Expiry::Never).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn snapshot_restores_to_equal_store() {
        let mut inv = Inventory::new();
        inv.add("Bandage", 20, Expiry::Never).unwrap();
        inv.add("Syringe", 10, date("2024-12-01")).unwrap();
        inv.add("Syringe", 3, Expiry::Never).unwrap();

        let snapshot = inv.snapshot();
        let mut reversed = snapshot.clone();
        reversed.reverse();

        assert_eq!(Inventory::from_records(snapshot).unwrap(), inv);
        assert_eq!(Inventory::from_records(reversed).unwrap(), inv);
    }

    #[test]
    fn restore_rejects_invalid_records() {
        let records = vec![ItemRecord::new("Bandage", 0, None)];
        assert!(Inventory::from_records(records).is_err());
    }

    #[test]
    fn mutations_are_recorded_but_queries_are_not() {
        let log = TransactionLog::new();
        let mut inv = Inventory::new().with_observer(log.clone());

        inv.add("Bandage", 20, Expiry::Never).unwrap();
        inv.add("Bandage", 5, date("2024-12-01")).unwrap();
        inv.edit("Bandage", 8, Expiry::Never).unwrap();
        inv.consume("Bandage", 2).unwrap();
        inv.delete("Bandage", Expiry::Never).unwrap();
        let _ = inv.add("", 1, Expiry::Never);
        let _ = inv.list();
        let _ = inv.find("band");
        let _ = inv.expiring_before(date("2030-01-01"));
        let _ = inv.to_restock(100);

        let kinds: Vec<_> = log.entries().iter().map(|t| (t.kind, t.quantity)).collect();
        assert_eq!(
            kinds,
            vec![
                (TransactionKind::Add, 20),
                (TransactionKind::Add, 5),
                (TransactionKind::Edit, 8),
                (TransactionKind::Use, 2),
                (TransactionKind::Delete, 8),
            ]
        );
        assert_eq!(log.entries()[1].expiry_date, Some(date("2024-12-01")));
    }

    #[test]
    fn closures_can_observe() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut inv = Inventory::new()
            .with_observer(move |t: Transaction| sink.borrow_mut().push(t.to_string()));

        inv.add("Gauze", 3, Expiry::Never).unwrap();
        inv.add_silent("Gauze", 3, Expiry::Never).unwrap();
        assert_eq!(*seen.borrow(), vec!["ADD 3 Gauze".to_string()]);
    }
}
