//! Progress store: review state per word id.
use super::scheduler::compute_next_state;
use super::{Rating, ReviewState};
use crate::error::{VocabError, VocabResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key-value access to review states.
///
/// The key passed to `put` must equal `state.word_id`.
pub trait ProgressStore {
    fn get(&self, word_id: &str) -> Option<&ReviewState>;
    fn put(&mut self, word_id: &str, state: ReviewState) -> VocabResult<()>;
}

/// In-memory progress store. Serializes as a plain `{ wordId: state }` object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap {
    states: BTreeMap<String, ReviewState>,
}

impl ProgressMap {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rates `word_id` at `now` and stores the resulting state.
    pub fn apply_rating(
        &mut self,
        word_id: &str,
        rating: Rating,
        now: i64,
    ) -> VocabResult<&ReviewState> {
        let next = compute_next_state(word_id, self.get(word_id), rating, now);
        self.put(word_id, next)?;
        Ok(&self.states[word_id])
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when no word has been rated yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Words that were rated at least once. Alias of `len`, named after the
    /// "learned" counter shown to the user.
    pub fn learned_count(&self) -> usize {
        self.states.len()
    }

    /// Ids of words due at `now`, most overdue first.
    pub fn due_words(&self, now: i64) -> Vec<&str> {
        let mut due: Vec<&ReviewState> = self.states.values().filter(|s| s.is_due(now)).collect();
        due.sort_by(|a, b| {
            a.next_review
                .cmp(&b.next_review)
                .then_with(|| a.word_id.cmp(&b.word_id))
        });
        due.into_iter().map(|s| s.word_id.as_str()).collect()
    }

    /// True if `word_id` has a record.
    pub fn contains(&self, word_id: &str) -> bool {
        self.states.contains_key(word_id)
    }

    /// Records in word id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReviewState)> {
        self.states.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Checks every record: it must sit under its own word id and respect
    /// the state invariants (see `ReviewState::check_invariants`).
    pub fn validate(&self) -> VocabResult<()> {
        for (key, state) in &self.states {
            check_key(key, state)?;
            state.check_invariants()?;
        }
        Ok(())
    }
}

impl ProgressStore for ProgressMap {
    fn get(&self, word_id: &str) -> Option<&ReviewState> {
        self.states.get(word_id)
    }

    fn put(&mut self, word_id: &str, state: ReviewState) -> VocabResult<()> {
        check_key(word_id, &state)?;
        self.states.insert(word_id.to_string(), state);
        Ok(())
    }
}

fn check_key(key: &str, state: &ReviewState) -> VocabResult<()> {
    if key != state.word_id {
        log::warn!("rejecting state for '{}' stored under '{}'", state.word_id, key);
        return Err(VocabError::WordIdMismatch {
            key: key.to_string(),
            word_id: state.word_id.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400_000;

    #[test]
    fn test_apply_rating_creates_then_replaces() {
        let mut progress = ProgressMap::new();
        assert!(progress.get("cat").is_none());

        let first = progress.apply_rating("cat", Rating::Good, 0).unwrap().clone();
        assert_eq!(first.word_id, "cat");
        assert_eq!(first.streak, 1);

        let second = progress.apply_rating("cat", Rating::Good, DAY).unwrap();
        assert_eq!(second.streak, 2);
        assert_eq!(second.history.len(), 2);
        assert_eq!(progress.len(), 1);
    }

    #[test]
    fn test_put_rejects_mismatched_key() {
        let mut progress = ProgressMap::new();
        let state = compute_next_state("dog", None, Rating::Good, 0);
        let result = progress.put("cat", state);
        assert!(matches!(result, Err(VocabError::WordIdMismatch { .. })));
        assert!(progress.is_empty());
    }

    #[test]
    fn test_due_words_ordered_by_next_review() {
        let mut progress = ProgressMap::new();
        progress.apply_rating("late", Rating::Easy, 0).unwrap();
        progress.apply_rating("now", Rating::Again, 5).unwrap();
        progress.apply_rating("early", Rating::Good, -DAY).unwrap();

        assert_eq!(progress.due_words(5), vec!["early", "now"]);
        assert_eq!(progress.due_words(DAY), vec!["early", "now", "late"]);
        assert!(progress.due_words(-1).is_empty());
    }

    #[test]
    fn test_learned_count_and_clear() {
        let mut progress = ProgressMap::new();
        progress.apply_rating("a", Rating::Again, 0).unwrap();
        progress.apply_rating("b", Rating::Hard, 0).unwrap();
        progress.apply_rating("a", Rating::Good, 1).unwrap();
        assert_eq!(progress.learned_count(), 2);
        assert!(progress.contains("b"));

        progress.clear();
        assert!(progress.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut progress = ProgressMap::new();
        progress.apply_rating("tree", Rating::Good, 7).unwrap();

        let value = serde_json::to_value(&progress).unwrap();
        assert_eq!(value["tree"]["wordId"], "tree");
        assert_eq!(value["tree"]["history"][0]["timestamp"], 7);

        let restored: ProgressMap = serde_json::from_value(value).unwrap();
        assert_eq!(restored, progress);
    }

    #[test]
    fn test_validate_rejects_out_of_range_state() {
        let json = r#"{ "tree": { "wordId": "tree", "nextReview": 0, "interval": 3,
            "easeFactor": 0.5, "streak": 1, "history": [] } }"#;
        let progress: ProgressMap = serde_json::from_str(json).unwrap();
        assert!(matches!(
            progress.validate(),
            Err(VocabError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_validate_detects_orphaned_record() {
        let json = r#"{ "tree": { "wordId": "", "nextReview": 0, "interval": 0,
            "easeFactor": 2.5, "streak": 0, "history": [] } }"#;
        let progress: ProgressMap = serde_json::from_str(json).unwrap();
        assert!(progress.validate().is_err());
    }
}
