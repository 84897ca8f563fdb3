//! Review state of one word, as kept in the progress store.
use super::ReviewEvent;
use crate::error::{VocabError, VocabResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Ease factor given to a word on its first rating.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;
/// Ease factor never drops below this.
pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const MS_PER_DAY: i64 = 86_400_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    pub word_id: String,
    /// Earliest timestamp (ms) at which the word is shown again.
    #[serde(deserialize_with = "deserialize_millis")]
    pub next_review: i64,
    /// Days until the next review. Fractional, never rounded.
    pub interval: f64,
    pub ease_factor: f64,
    /// Consecutive ratings other than Again.
    pub streak: u32,
    pub history: Vec<ReviewEvent>,
}

/// Accepts integer or fractional milliseconds; fractions are rounded.
///
/// Older progress files store `nextReview` as a float such as `1700000415999.99999`.
pub(crate) fn deserialize_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Int(i64),
        Float(f64),
    }

    match Millis::deserialize(deserializer)? {
        Millis::Int(ms) => Ok(ms),
        Millis::Float(ms) if ms.is_finite() => Ok(ms.round() as i64),
        Millis::Float(ms) => Err(serde::de::Error::custom(format!(
            "timestamp {} is not a finite number",
            ms
        ))),
    }
}

impl ReviewState {
    /// True once `now` has reached `next_review`.
    pub fn is_due(&self, now: i64) -> bool {
        self.next_review <= now
    }

    /// Number of ratings recorded for the word.
    pub fn review_count(&self) -> usize {
        self.history.len()
    }

    /// Most recent rating, if any.
    pub fn last_review(&self) -> Option<&ReviewEvent> {
        self.history.last()
    }

    /// Checks the value ranges a stored state must respect:
    /// `interval >= 0`, `ease_factor >= 1.3` and a chronological history.
    pub fn check_invariants(&self) -> VocabResult<()> {
        let invalid = |reason: String| {
            log::warn!("invalid state for '{}': {}", self.word_id, reason);
            Err(VocabError::InvalidState {
                word_id: self.word_id.clone(),
                reason,
            })
        };

        if self.interval.is_nan() || self.interval < 0.0 {
            return invalid(format!("interval {} is not >= 0", self.interval));
        }
        if self.ease_factor.is_nan() || self.ease_factor < MIN_EASE_FACTOR {
            return invalid(format!(
                "ease factor {} is below {}",
                self.ease_factor, MIN_EASE_FACTOR
            ));
        }
        if let Some(pair) = self
            .history
            .windows(2)
            .find(|pair| pair[0].timestamp > pair[1].timestamp)
        {
            return invalid(format!(
                "history goes back in time ({} after {})",
                pair[1].timestamp, pair[0].timestamp
            ));
        }
        Ok(())
    }
}
