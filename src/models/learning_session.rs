//! Learning session: picks the next word to show and records ratings.
//! Progress is keyed by the word's term.

use super::scheduler::compute_next_state;
use super::{ProgressStore, Rating, ReviewState, Word};
use crate::clock::Clock;
use crate::error::VocabResult;
use log::debug;

/// Owns the progress store for the duration of the session, so ratings are applied one at a time.
pub struct LearningSession<S: ProgressStore, C: Clock> {
    words: Vec<Word>,
    store: S,
    clock: C,
    current: Option<usize>,
    rated_count: usize,
}

impl<S: ProgressStore, C: Clock> LearningSession<S, C> {
    /// Starts a session over `words` and selects the first word to show.
    pub fn new(words: Vec<Word>, store: S, clock: C) -> Self {
        let mut session = Self {
            words,
            store,
            clock,
            current: None,
            rated_count: 0,
        };
        session.next_word();
        session
    }

    /// Word currently presented, `None` once the session is complete.
    pub fn current_word(&self) -> Option<&Word> {
        self.current.and_then(|idx| self.words.get(idx))
    }

    /// Moves to the most overdue word, or the first word never rated.
    /// Returns `None` once nothing is due and every word has been seen.
    pub fn next_word(&mut self) -> Option<&Word> {
        let now = self.clock.now_ms();
        let mut most_overdue: Option<(i64, usize)> = None;
        let mut first_new: Option<usize> = None;

        for (idx, word) in self.words.iter().enumerate() {
            match self.store.get(&word.term) {
                Some(state) if state.is_due(now) => {
                    if most_overdue.is_none_or(|(due, _)| state.next_review < due) {
                        most_overdue = Some((state.next_review, idx));
                    }
                }
                Some(_) => {}
                None => {
                    if first_new.is_none() {
                        first_new = Some(idx);
                    }
                }
            }
        }

        self.current = most_overdue.map(|(_, idx)| idx).or(first_new);
        self.current_word()
    }

    /// Records `rating` for the current word and moves on.
    /// Returns the new state, or `None` if the session is already complete.
    pub fn rate_current(&mut self, rating: Rating) -> VocabResult<Option<ReviewState>> {
        let Some(word) = self.current_word() else {
            return Ok(None);
        };
        let term = word.term.clone();
        let now = self.clock.now_ms();

        let next = compute_next_state(&term, self.store.get(&term), rating, now);
        self.store.put(&term, next.clone())?;
        self.rated_count += 1;
        debug!("rated '{}' {} -> next review at {}", term, rating, next.next_review);

        self.next_word();
        Ok(Some(next))
    }

    /// Same as `rate_current`, for a raw rating value from the caller.
    pub fn rate_value(&mut self, value: u8) -> VocabResult<Option<ReviewState>> {
        let rating = Rating::try_from(value)?;
        self.rate_current(rating)
    }

    /// Session words with a stored record.
    pub fn learned_count(&self) -> usize {
        self.words
            .iter()
            .filter(|word| self.store.get(&word.term).is_some())
            .count()
    }

    /// Ratings recorded in this session.
    pub fn rated_count(&self) -> usize {
        self.rated_count
    }

    /// Words in the session.
    pub fn total_count(&self) -> usize {
        self.words.len()
    }

    /// True when nothing is left to show.
    pub fn is_completed(&self) -> bool {
        self.current.is_none()
    }

    /// Progress recorded so far.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ends the session and hands back the progress store, e.g. to save it.
    pub fn into_store(self) -> S {
        self.store
    }
}
