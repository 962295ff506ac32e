//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all pill operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Restores** the inventory and its transaction log for one scope on open
//! - **Dispatches** to the appropriate command function
//! - **Persists** a snapshot after every successful mutation
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! A failed command leaves the inventory untouched and nothing is written.
//!
//! `config` and `init` only touch the scope directory, so they are free
//! functions that work even when the stored inventory cannot be restored.
//!
//! ## Generic Over DataStore
//!
//! `PillApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PillApi<FileStore>`
//! - Testing: `PillApi<InMemoryStore>`

use crate::commands;
use crate::error::{PillError, Result};
use crate::inventory::Inventory;
use crate::model::Scope;
use crate::store::DataStore;
use crate::transactions::TransactionLog;
use chrono::NaiveDate;
use tracing::debug;

/// The main API facade for pill operations.
///
/// Generic over `DataStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct PillApi<S: DataStore> {
    store: S,
    scope: Scope,
    inventory: Inventory,
    log: TransactionLog,
}

impl<S: DataStore> PillApi<S> {
    /// Restores the inventory and transaction log of `scope` from `store`.
    /// A stored record that fails validation aborts the open with a
    /// [`PillError::Store`] naming the scope.
    pub fn open(store: S, scope: Scope) -> Result<Self> {
        let log = TransactionLog::from(store.load_transactions(scope)?);
        let inventory = Inventory::from_records(store.load_items(scope)?)
            .map_err(|err| {
                PillError::Store(format!(
                    "Stored {:?} inventory holds an invalid record: {}",
                    scope, err
                ))
            })?
            .with_observer(log.clone());
        debug!(
            ?scope,
            batches = inventory.size(),
            transactions = log.len(),
            "opened inventory"
        );

        Ok(Self {
            store,
            scope,
            inventory,
            log,
        })
    }

    pub fn add_item(
        &mut self,
        name: &str,
        quantity: i64,
        expiry: Option<NaiveDate>,
    ) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.inventory, name, quantity, expiry)?;
        self.persist()?;
        Ok(result)
    }

    pub fn delete_item(
        &mut self,
        name: &str,
        expiry: Option<NaiveDate>,
    ) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.inventory, name, expiry)?;
        self.persist()?;
        Ok(result)
    }

    pub fn edit_item(
        &mut self,
        name: &str,
        quantity: i64,
        expiry: Option<NaiveDate>,
    ) -> Result<commands::CmdResult> {
        let result = commands::edit::run(&mut self.inventory, name, quantity, expiry)?;
        self.persist()?;
        Ok(result)
    }

    pub fn use_item(&mut self, name: &str, quantity: i64) -> Result<commands::CmdResult> {
        let result = commands::consume::run(&mut self.inventory, name, quantity)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn find_items(&self, term: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.inventory, term)
    }

    pub fn expired_items(&self, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::expiring::run(&self.inventory, today, today)
    }

    pub fn expiring_items(
        &self,
        cutoff: NaiveDate,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::expiring::run(&self.inventory, cutoff, today)
    }

    pub fn restock_items(&self, threshold: i64) -> Result<commands::CmdResult> {
        commands::restock::run(&self.inventory, threshold)
    }

    pub fn transactions(&self) -> Result<commands::CmdResult> {
        commands::transactions::run(&self.log)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save_items(self.scope, &self.inventory.snapshot())?;
        self.store.save_transactions(self.scope, &self.log.entries())?;
        Ok(())
    }
}

pub fn config(
    paths: &commands::PillPaths,
    scope: Scope,
    action: ConfigAction,
) -> Result<commands::CmdResult> {
    commands::config::run(paths, scope, action)
}

pub fn init(paths: &commands::PillPaths, scope: Scope) -> Result<commands::CmdResult> {
    commands::init::run(paths, scope)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayItem, MessageLevel, PillPaths};
