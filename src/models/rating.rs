//! Self-assessed recall rating given after a card is revealed.
use crate::error::VocabError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1 = Again (forgotten), 2 = Hard, 3 = Good, 4 = Easy.
///
/// Persisted as the bare integer so history entries read `{"timestamp": .., "rating": 3}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    Again = 1,
    Hard = 2,
    Good = 3,
    Easy = 4,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    /// Numeric value, 1 to 4.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Anything but Again counts towards the streak.
    pub fn is_success(self) -> bool {
        self != Rating::Again
    }
}

impl TryFrom<u8> for Rating {
    type Error = VocabError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Again),
            2 => Ok(Rating::Hard),
            3 => Ok(Rating::Good),
            4 => Ok(Rating::Easy),
            other => Err(VocabError::InvalidRating(other)),
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Again => "Again",
            Rating::Hard => "Hard",
            Rating::Good => "Good",
            Rating::Easy => "Easy",
        };
        f.write_str(label)
    }
}
