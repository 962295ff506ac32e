use super::DataStore;
use crate::error::Result;
use crate::model::{ItemRecord, Scope};
use crate::transactions::Transaction;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: HashMap<Scope, Vec<ItemRecord>>,
    transactions: HashMap<Scope, Vec<Transaction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_items(&self, scope: Scope) -> Result<Vec<ItemRecord>> {
        Ok(self.items.get(&scope).cloned().unwrap_or_default())
    }

    fn save_items(&mut self, scope: Scope, items: &[ItemRecord]) -> Result<()> {
        self.items.insert(scope, items.to_vec());
        Ok(())
    }

    fn load_transactions(&self, scope: Scope) -> Result<Vec<Transaction>> {
        Ok(self.transactions.get(&scope).cloned().unwrap_or_default())
    }

    fn save_transactions(&mut self, scope: Scope, transactions: &[Transaction]) -> Result<()> {
        self.transactions.insert(scope, transactions.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(&mut self, scope: Scope, record: ItemRecord) {
            self.store.items.entry(scope).or_default().push(record);
        }

        pub fn with_item(mut self, name: &str, quantity: i64, scope: Scope) -> Self {
            self.push(scope, ItemRecord::new(name, quantity, None));
            self
        }

        pub fn with_batch(
            mut self,
            name: &str,
            quantity: i64,
            expiry: NaiveDate,
            scope: Scope,
        ) -> Self {
            self.push(scope, ItemRecord::new(name, quantity, Some(expiry)));
            self
        }
    }
}
