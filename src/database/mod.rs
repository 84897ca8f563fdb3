//! Persistence of progress and word lists in a string key-value store.
//!
//! Values are JSON documents: the progress map as `{ wordId: ReviewState }`
//! and the word list as an array of words.

pub mod db;

use crate::error::VocabResult;
use crate::models::{ProgressMap, Word};
use log::{debug, info};
use std::collections::HashMap;

pub use db::SqliteStorage;

/// String storage addressed by key.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> VocabResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> VocabResult<()>;
    fn remove_item(&mut self, key: &str) -> VocabResult<()>;
}

/// Storage kept in memory only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> VocabResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> VocabResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> VocabResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Loads the progress map stored under `key`. A missing key gives an empty map.
pub fn load_progress(storage: &impl KeyValueStore, key: &str) -> VocabResult<ProgressMap> {
    let Some(json) = storage.get_item(key)? else {
        return Ok(ProgressMap::new());
    };
    let progress: ProgressMap = serde_json::from_str(&json)?;
    progress.validate()?;
    debug!("loaded progress for {} words from '{}'", progress.len(), key);
    Ok(progress)
}

/// Saves the progress map under `key`. An empty map is not written.
pub fn save_progress(
    storage: &mut impl KeyValueStore,
    key: &str,
    progress: &ProgressMap,
) -> VocabResult<()> {
    if progress.is_empty() {
        return Ok(());
    }
    let json = serde_json::to_string(progress)?;
    storage.set_item(key, &json)?;
    debug!("saved progress for {} words to '{}'", progress.len(), key);
    Ok(())
}

/// Loads the word list stored under `key`. A missing key gives an empty list.
pub fn load_words(storage: &impl KeyValueStore, key: &str) -> VocabResult<Vec<Word>> {
    match storage.get_item(key)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Saves the word list under `key`, replacing any previous list.
pub fn save_words(storage: &mut impl KeyValueStore, key: &str, words: &[Word]) -> VocabResult<()> {
    let json = serde_json::to_string(words)?;
    storage.set_item(key, &json)?;
    debug!("saved {} words to '{}'", words.len(), key);
    Ok(())
}

/// Removes both the word list and the progress.
pub fn reset_all(
    storage: &mut impl KeyValueStore,
    words_key: &str,
    progress_key: &str,
) -> VocabResult<()> {
    storage.remove_item(words_key)?;
    storage.remove_item(progress_key)?;
    info!("removed stored words and progress");
    Ok(())
}
