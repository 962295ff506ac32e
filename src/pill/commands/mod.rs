use crate::config::PillConfig;
use crate::error::{PillError, Result};
use crate::model::{Item, Scope};
use crate::transactions::Transaction;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod consume;
pub mod delete;
pub mod edit;
pub mod expiring;
pub mod find;
pub mod helpers;
pub mod init;
pub mod list;
pub mod restock;
pub mod transactions;

#[derive(Debug, Clone)]
pub struct PillPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl PillPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| PillError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A batch as shown to the user, with its 1-based listing position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub index: usize,
    pub item: Item,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub heading: Option<String>,
    pub listed_items: Vec<DisplayItem>,
    pub transactions: Vec<Transaction>,
    pub config: Option<PillConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_config(mut self, config: PillConfig) -> Self {
        self.config = Some(config);
        self
    }
}
