//! A single rating, appended to a word's history and never changed afterwards.
use super::Rating;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvent {
    /// Milliseconds since the Unix epoch.
    #[serde(deserialize_with = "super::review_state::deserialize_millis")]
    pub timestamp: i64,
    pub rating: Rating,
}

impl ReviewEvent {
    /// Event for `rating` given at `timestamp` (ms).
    pub fn new(timestamp: i64, rating: Rating) -> Self {
        Self { timestamp, rating }
    }
}
