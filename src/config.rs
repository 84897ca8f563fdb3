//! Application settings: where progress is stored and under which keys.
use crate::database::SqliteStorage;
use crate::error::VocabResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub progress_key: String,
    pub words_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("db.sqlite3"),
            progress_key: "english-app-progress".to_string(),
            words_key: "english-app-words".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> VocabResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_json::from_str(&contents)?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Opens the SQLite storage at `database_path`.
    pub fn open_storage(&self) -> VocabResult<SqliteStorage> {
        SqliteStorage::open(&self.database_path)
    }
}
