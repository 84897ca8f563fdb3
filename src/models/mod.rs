pub mod learning_session;
pub mod progress;
pub mod rating;
pub mod review_event;
pub mod review_state;
pub mod scheduler;
pub mod word;
pub mod word_list;

pub use learning_session::LearningSession;
pub use progress::{ProgressMap, ProgressStore};
pub use rating::Rating;
pub use review_event::ReviewEvent;
pub use review_state::ReviewState;
pub use word::{Level, Word};
pub use word_list::WordList;
