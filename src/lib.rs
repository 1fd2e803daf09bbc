pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;

pub use error::{FlashcardError, Result};
pub use models::{
    AnswerOutcome, BestScore, CardColor, Flashcard, Mode, Navigation, QuizSession, QuizSummary,
    StudySession,
};
