//! JSON import/export of progress and word lists.
//! Files hold the same documents that are kept in storage.

use crate::error::VocabResult;
use crate::models::{ProgressMap, Word};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn export_to_path<T: Serialize + ?Sized>(value: &T, path: &Path) -> VocabResult<()> {
    let json_string = serde_json::to_string_pretty(value)?;
    fs::write(path, json_string)?;
    Ok(())
}

fn import_from_path<T: DeserializeOwned>(path: &Path) -> VocabResult<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn export_progress_to_path(progress: &ProgressMap, path: impl AsRef<Path>) -> VocabResult<()> {
    export_to_path(progress, path.as_ref())?;
    log::info!(
        "exported progress for {} words to '{}'",
        progress.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Reads a progress file. Every record must sit under its own word id.
pub fn import_progress(path: impl AsRef<Path>) -> VocabResult<ProgressMap> {
    let progress: ProgressMap = import_from_path(path.as_ref())?;
    progress.validate()?;
    log::info!(
        "imported progress for {} words from '{}'",
        progress.len(),
        path.as_ref().display()
    );
    Ok(progress)
}

pub fn export_words_to_path(words: &[Word], path: impl AsRef<Path>) -> VocabResult<()> {
    export_to_path(words, path.as_ref())?;
    log::info!("exported {} words to '{}'", words.len(), path.as_ref().display());
    Ok(())
}

pub fn import_words(path: impl AsRef<Path>) -> VocabResult<Vec<Word>> {
    let words: Vec<Word> = import_from_path(path.as_ref())?;
    log::info!("imported {} words from '{}'", words.len(), path.as_ref().display());
    Ok(words)
}
