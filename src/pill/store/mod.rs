//! # Storage Layer
//!
//! The [`DataStore`] trait is where an inventory is snapshotted to and
//! restored from. The store only moves flat records around; merge rules live
//! in [`Inventory`](crate::inventory::Inventory).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Batches stored in `items.json` (JSON array, listing order)
//!   - Audit trail stored in `transactions.json`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Scope Pattern
//!
//! All operations take a [`Scope`] parameter:
//! - `Scope::Project`: Local `.pill/` directory
//! - `Scope::Global`: User-wide storage (`~/.local/share/pill/`)
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! .pill/
//! ├── items.json          # [{"name", "quantity", "expiry_date"?}, ...]
//! ├── transactions.json   # Audit trail, oldest first
//! └── config.json         # Scope configuration
//! ```

use crate::error::Result;
use crate::model::{ItemRecord, Scope};
use crate::transactions::Transaction;

pub mod fs;
pub mod memory;

/// Abstract interface for inventory persistence.
pub trait DataStore {
    /// Load every stored batch record; empty if nothing was saved yet
    fn load_items(&self, scope: Scope) -> Result<Vec<ItemRecord>>;

    /// Replace the stored batch records
    fn save_items(&mut self, scope: Scope, items: &[ItemRecord]) -> Result<()>;

    /// Load the audit trail, oldest first
    fn load_transactions(&self, scope: Scope) -> Result<Vec<Transaction>>;

    /// Replace the stored audit trail
    fn save_transactions(&mut self, scope: Scope, transactions: &[Transaction]) -> Result<()>;
}
