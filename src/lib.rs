pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use config::AppConfig;
pub use error::{VocabError, VocabResult};
pub use models::{
    LearningSession, ProgressMap, ProgressStore, Rating, ReviewEvent, ReviewState, Word,
    WordList,
};
