use crate::api::{PillApi, PillPaths};
use crate::config::PillConfig;
use crate::error::{PillError, Result};
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub const PROJECT_DIR_NAME: &str = ".pill";
pub const GLOBAL_DATA_ENV: &str = "PILL_GLOBAL_DATA";

pub struct PillContext {
    pub paths: PillPaths,
    pub scope: Scope,
    pub config: PillConfig,
}

impl PillContext {
    /// Restores the inventory of the selected scope from disk.
    pub fn open_api(&self) -> Result<PillApi<FileStore>> {
        let store = FileStore::new(self.paths.project.clone(), self.paths.global.clone());
        PillApi::open(store, self.scope)
    }
}

/// Find the project root by walking up from cwd looking for a directory
/// that contains a `.pill` directory.
/// Returns None if none is found before reaching home or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(PROJECT_DIR_NAME).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Global data directory: `PILL_GLOBAL_DATA` when set, else the platform
/// data dir.
pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DATA_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "pill", "pill")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PillError::Store("Could not determine data directory".to_string()))
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<PillContext> {
    let project_dir = find_project_root(cwd)
        .unwrap_or_else(|| cwd.to_path_buf())
        .join(PROJECT_DIR_NAME);
    let global_dir = global_data_dir()?;

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_dir,
    };
    let config = PillConfig::load(config_dir)?;

    let paths = PillPaths {
        project: Some(project_dir),
        global: global_dir,
    };

    Ok(PillContext {
        paths,
        scope,
        config,
    })
}
