use super::DataStore;
use crate::error::{PillError, Result};
use crate::model::{ItemRecord, Scope};
use crate::transactions::Transaction;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const ITEMS_FILENAME: &str = "items.json";
const TRANSACTIONS_FILENAME: &str = "transactions.json";

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(PillError::Io)?;
        }
        Ok(())
    }

    fn get_store_path(&self, scope: Scope) -> Result<PathBuf> {
        let root = match scope {
            Scope::Project => self.project_root.as_ref().ok_or_else(|| {
                PillError::Store("No project scope available".to_string())
            })?,
            Scope::Global => &self.global_root,
        };
        Ok(root.clone())
    }

    fn read_json<T: DeserializeOwned>(&self, scope: Scope, filename: &str) -> Result<Vec<T>> {
        let path = self.get_store_path(scope)?.join(filename);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(PillError::Io)?;
        let entries: Vec<T> = serde_json::from_str(&content)
            .map_err(|e| PillError::Store(format!("{} is corrupt: {}", path.display(), e)))?;
        debug!(path = %path.display(), entries = entries.len(), "loaded");
        Ok(entries)
    }

    fn write_json<T: Serialize>(&self, scope: Scope, filename: &str, entries: &[T]) -> Result<()> {
        let root = self.get_store_path(scope)?;
        self.ensure_dir(&root)?;
        let path = root.join(filename);
        let content = serde_json::to_string_pretty(entries).map_err(PillError::Serialization)?;
        fs::write(&path, content).map_err(PillError::Io)?;
        debug!(path = %path.display(), entries = entries.len(), "saved");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_items(&self, scope: Scope) -> Result<Vec<ItemRecord>> {
        self.read_json(scope, ITEMS_FILENAME)
    }

    fn save_items(&mut self, scope: Scope, items: &[ItemRecord]) -> Result<()> {
        self.write_json(scope, ITEMS_FILENAME, items)
    }

    fn load_transactions(&self, scope: Scope) -> Result<Vec<Transaction>> {
        self.read_json(scope, TRANSACTIONS_FILENAME)
    }

    fn save_transactions(&mut self, scope: Scope, transactions: &[Transaction]) -> Result<()> {
        self.write_json(scope, TRANSACTIONS_FILENAME, transactions)
    }
}
