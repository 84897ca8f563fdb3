//! Spaced repetition scheduler.
//!
//! A simplified SM-2 heuristic driven by a four-level rating:
//! - First rating of a word: Again leaves it due immediately (interval 0), anything else schedules it for tomorrow
//! - Again on a known word: streak reset, interval back to 1 day, ease factor -0.2
//! - Hard: ease factor -0.15, interval x1.2
//! - Good: interval x ease factor
//! - Easy: ease factor +0.15, interval x new ease factor x1.3
//! - The ease factor has a floor of 1.3 and no ceiling
//!
//! Hard and Good scale by the ease factor as it was before the review, Easy by the raised one.
//! That asymmetry is part of the heuristic and is kept as is.

use super::review_state::{INITIAL_EASE_FACTOR, MIN_EASE_FACTOR, MS_PER_DAY};
use super::{Rating, ReviewEvent, ReviewState};
use log::{trace, warn};

/// Converts an interval in days to milliseconds, rounded to the nearest millisecond.
///
/// Saturates at `i64::MAX` for huge intervals. A NaN interval counts as 0.
pub fn days_to_ms(interval: f64) -> i64 {
    if interval.is_nan() {
        warn!("NaN interval treated as 0 days");
        return 0;
    }
    (interval * MS_PER_DAY as f64).round() as i64
}

/// Timestamp `interval` days after `now`, clamped to `i64::MAX`.
pub fn review_time(now: i64, interval: f64) -> i64 {
    now.saturating_add(days_to_ms(interval))
}

/// Computes the state of `word_id` after it was rated `rating` at `now` (ms).
///
/// `previous` is `None` the first time a word is rated. When it is present its
/// `word_id` is carried over and a different `word_id` argument is logged.
///
/// Never fails: `next_review` is always `>= now`, saturating for very long intervals.
pub fn compute_next_state(
    word_id: &str,
    previous: Option<&ReviewState>,
    rating: Rating,
    now: i64,
) -> ReviewState {
    let event = ReviewEvent::new(now, rating);

    let Some(previous) = previous else {
        let (interval, streak) = match rating {
            Rating::Again => (0.0, 0),
            _ => (1.0, 1),
        };
        trace!("first rating of '{}': {} -> interval {}", word_id, rating, interval);
        return ReviewState {
            word_id: word_id.to_string(),
            next_review: review_time(now, interval),
            interval,
            ease_factor: INITIAL_EASE_FACTOR,
            streak,
            history: vec![event],
        };
    };

    if previous.word_id != word_id {
        warn!("'{}' rated with state of '{}', keeping stored id", word_id, previous.word_id);
    }

    let streak = previous.streak.saturating_add(1);
    let (interval, ease_factor, streak) = match rating {
        Rating::Again => (1.0, (previous.ease_factor - 0.2).max(MIN_EASE_FACTOR), 0),
        Rating::Hard => (
            previous.interval * 1.2,
            (previous.ease_factor - 0.15).max(MIN_EASE_FACTOR),
            streak,
        ),
        Rating::Good => (
            previous.interval * previous.ease_factor,
            previous.ease_factor,
            streak,
        ),
        Rating::Easy => {
            let ease_factor = previous.ease_factor + 0.15;
            (
                previous.interval * ease_factor * 1.3,
                ease_factor,
                streak,
            )
        }
    };

    trace!(
        "'{}' rated {}: interval {} -> {}, ease {} -> {}",
        previous.word_id, rating, previous.interval, interval, previous.ease_factor, ease_factor
    );

    let mut history = Vec::with_capacity(previous.history.len() + 1);
    history.extend_from_slice(&previous.history);
    history.push(event);

    ReviewState {
        word_id: previous.word_id.clone(),
        next_review: review_time(now, interval),
        interval,
        ease_factor,
        streak,
        history,
    }
}

/// Interval (days) each rating would give, in the order Again, Hard, Good, Easy.
pub fn preview_intervals(previous: Option<&ReviewState>) -> [f64; 4] {
    let word_id = previous.map(|p| p.word_id.as_str()).unwrap_or_default();
    Rating::ALL.map(|rating| compute_next_state(word_id, previous, rating, 0).interval)
}
