//! Word list backed by newline-separated text, parsed on first access.
use super::{Level, Word};
use std::sync::OnceLock;

/// Definition shown until a real one is fetched.
pub const PLACEHOLDER_DEFINITION: &str = "Loading...";

/// Word source over raw text, parsed lazily and then cached.
pub struct WordList {
    raw: String,
    words: OnceLock<Vec<String>>,
}

impl WordList {
    /// Wraps newline-separated text. Nothing is parsed until first use.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            words: OnceLock::new(),
        }
    }

    /// All non-blank, trimmed lines. Parsed once, then cached.
    pub fn full_word_list(&self) -> &[String] {
        self.words.get_or_init(|| {
            let words: Vec<String> = self
                .raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            log::debug!("parsed word list: {} entries", words.len());
            words
        })
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.full_word_list().len()
    }

    /// True when the text holds no words.
    pub fn is_empty(&self) -> bool {
        self.full_word_list().is_empty()
    }

    /// Placeholder entries for `limit` words starting at `offset`.
    pub fn words_batch(&self, offset: usize, limit: usize) -> Vec<Word> {
        self.full_word_list()
            .iter()
            .skip(offset)
            .take(limit)
            .map(|term| Word {
                id: term.clone(),
                term: term.clone(),
                definition: PLACEHOLDER_DEFINITION.to_string(),
                level: Some(Level::A1),
                tags: vec!["common".to_string()],
                ..Default::default()
            })
            .collect()
    }
}
